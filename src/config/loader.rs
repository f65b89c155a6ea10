//! Configuration loading from disk.
//!
//! Loading is parse → overrides → validation, so a command-line value can
//! replace a bad file value before anything is checked.

use std::fs;
use std::path::Path;

use crate::access::ZoneSetting;
use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line. `None` keeps the file (or default) value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub timezone: Option<ZoneSetting>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SiteConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
        if let Some(zone) = self.timezone {
            config.schedule.timezone = zone;
        }
    }
}

/// Read and deserialize a TOML file without semantic checks.
pub fn parse_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: file (or defaults), then overrides,
/// then a single validation pass.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SiteConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(path)?,
        None => SiteConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::io::Write;

    fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
        resolve_config(Some(path), &ConfigOverrides::default())
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = config_file("[listener]\nbind_address = \"127.0.0.1:8000\"\n");

        let config = load(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let file = config_file("[timeouts]\nrequest_secs = 0\n");

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errs) if errs.len() == 1));
        assert!(err.to_string().contains("request_secs"));
    }

    #[test]
    fn test_parse_skips_validation() {
        let file = config_file("[listener]\nbind_address = \"not-an-addr\"\n");

        let config = parse_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "not-an-addr");
    }

    #[test]
    fn test_bind_override_replaces_invalid_file_value() {
        let file = config_file("[listener]\nbind_address = \"not-an-addr\"\n");
        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:0".into()),
            timezone: None,
        };

        let config = resolve_config(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
    }

    #[test]
    fn test_timezone_override_replaces_file_value() {
        let file = config_file("[schedule]\ntimezone = \"utc\"\n");
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let overrides = ConfigOverrides {
            bind_address: None,
            timezone: Some(ZoneSetting::Fixed(offset)),
        };

        let config = resolve_config(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.schedule.timezone, ZoneSetting::Fixed(offset));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let overrides = ConfigOverrides {
            bind_address: Some("nowhere".into()),
            timezone: None,
        };

        let err = resolve_config(None, &overrides).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ref errs) if errs == &[ValidationError::BindAddress("nowhere".into())]
        ));
    }

    #[test]
    fn test_no_file_no_overrides_is_default() {
        let config = resolve_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }
}
