//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → static assets (served directly when a file matches)
//!     → access gate (closed notice outside business hours)
//!     → routing (page selection)
//!     → pages (document rendering)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, SiteServer};
