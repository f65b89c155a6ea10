//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request allowed by the access gate (method, path)
//!     → router.rs (route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: matched Page or NotFound
//!     → Page::render → (status, HtmlDocument)
//! ```
//!
//! # Design Decisions
//! - Routes fixed at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins
//! - Any method or path that matches nothing gets the 404 page

pub mod matcher;
pub mod router;

pub use router::{Page, Route, SiteRouter};
