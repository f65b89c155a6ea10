//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply CLI overrides)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → passed into SiteServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The business-hours window is not a setting

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ScheduleConfig, SecurityConfig, SiteConfig,
    StaticFilesConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
