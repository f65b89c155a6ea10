//! TechCorp marketing site.
//!
//! Serves a few templated pages, but only during business hours
//! (Monday-Friday, 09:00-17:00). Outside the window every request gets a
//! closed notice instead.

pub mod access;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod security;

pub use access::{AccessGate, Clock, EvaluationResult, FixedClock, SystemClock};
pub use config::SiteConfig;
pub use http::SiteServer;
pub use lifecycle::Shutdown;
