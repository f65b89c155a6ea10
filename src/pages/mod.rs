//! Page composition subsystem.
//!
//! # Data Flow
//! ```text
//! route handler
//!     → content.rs (page-specific fragment)
//!     → layout.rs (wrap in shared layout)
//!         → nav.rs (navigation entries, active marking)
//!     → document.rs (HtmlDocument value → text)
//!
//! access gate (closed)
//!     → closed.rs (standalone notice, no shared layout)
//! ```
//!
//! # Design Decisions
//! - Pages are values until serialization; nothing concatenates markup ad hoc
//! - Fragments are trusted server content and are inserted unescaped
//! - Titles and link labels are escaped as text

pub mod closed;
pub mod content;
pub mod document;
pub mod layout;
pub mod nav;

pub use document::{BodyRegion, Fragment, Head, HtmlDocument};
pub use layout::compose;
pub use nav::{build_nav, NavEntry};
