//! HTML document model and serialization.
//!
//! Pages are assembled as an [`HtmlDocument`] value (head fields plus an
//! ordered list of body regions) and only turned into text by [`HtmlDocument::render`].

use std::borrow::Cow;
use std::fmt::{self, Write};

use axum::response::{Html, IntoResponse, Response};

use crate::pages::nav::NavEntry;

/// Stylesheet linked from every page.
pub const STYLESHEET: &str = "/styles.css";

/// Trusted, server-authored HTML.
///
/// Inserted into documents without escaping. Code outside this crate can only
/// build one from a `'static` string, so request data never becomes markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(Cow<'static, str>);

impl Fragment {
    pub const fn from_static(html: &'static str) -> Self {
        Self(Cow::Borrowed(html))
    }

    /// Markup produced by this crate from values it formatted itself.
    pub(crate) fn generated(html: String) -> Self {
        Self(Cow::Owned(html))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Document head fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub title: String,
    pub stylesheet: Option<&'static str>,
}

impl Head {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: Some(STYLESHEET),
        }
    }
}

/// A top-level region of the document body, rendered in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyRegion {
    Navbar {
        brand: &'static str,
        entries: Vec<NavEntry>,
    },
    Main(Fragment),
    Footer(Fragment),
    /// Free-standing content inside a plain container.
    Container(Fragment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub head: Head,
    pub body: Vec<BodyRegion>,
}

impl HtmlDocument {
    pub fn new(head: Head, body: Vec<BodyRegion>) -> Self {
        Self { head, body }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")?;
        f.write_str("  <meta charset=\"UTF-8\">\n")?;
        f.write_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        )?;
        writeln!(f, "  <title>{}</title>", Escaped(&self.head.title))?;
        if let Some(href) = self.head.stylesheet {
            writeln!(f, "  <link rel=\"stylesheet\" href=\"{}\">", Escaped(href))?;
        }
        f.write_str("</head>\n<body>\n")?;
        for region in &self.body {
            write_region(f, region)?;
        }
        f.write_str("</body>\n</html>\n")
    }
}

fn write_region(f: &mut fmt::Formatter<'_>, region: &BodyRegion) -> fmt::Result {
    match region {
        BodyRegion::Navbar { brand, entries } => {
            f.write_str("  <nav class=\"navbar\">\n    <div class=\"nav-container\">\n")?;
            writeln!(
                f,
                "      <div class=\"nav-logo\">\n        <h2>{}</h2>\n      </div>",
                Escaped(brand)
            )?;
            f.write_str("      <div class=\"nav-links\">\n        ")?;
            for entry in entries {
                write!(
                    f,
                    "<a href=\"{}\" class=\"{}\">{}</a>",
                    Escaped(entry.path),
                    if entry.is_active { "active" } else { "" },
                    Escaped(entry.display_name)
                )?;
            }
            f.write_str("\n      </div>\n    </div>\n  </nav>\n")
        }
        BodyRegion::Main(content) => writeln!(
            f,
            "  <main class=\"main-content\">\n    <div class=\"container\">\n{}\n    </div>\n  </main>",
            content.as_str()
        ),
        BodyRegion::Footer(content) => writeln!(
            f,
            "  <footer class=\"footer\">\n    <div class=\"container\">\n      <p>{}</p>\n    </div>\n  </footer>",
            content.as_str()
        ),
        BodyRegion::Container(content) => writeln!(
            f,
            "  <div class=\"container\">\n{}\n  </div>",
            content.as_str()
        ),
    }
}

/// Text-node escaping for values that are not trusted fragments.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

impl IntoResponse for HtmlDocument {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}
