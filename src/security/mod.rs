//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (X-Content-Type-Options, X-Frame-Options, Referrer-Policy)
//! ```

pub mod headers;
