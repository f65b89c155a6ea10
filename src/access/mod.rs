//! Time-window access control.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → gate.rs (middleware)
//!         → clock.rs (current wall-clock time in the configured zone)
//!         → window.rs (Mon–Fri, 09:00–17:00 check)
//!     → Proceed: pass to page routing
//!     → Blocked: closed notice, status 200
//! ```
//!
//! # Design Decisions
//! - The window is fixed; only the zone it is read in is configurable
//! - The clock is injected so the gate is testable at any instant
//! - Evaluated before routing, so unknown paths are gated too

pub mod clock;
pub mod gate;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock, ZoneSetting};
pub use gate::{business_hours_gate, GateState};
pub use window::{AccessGate, EvaluationResult, TimeWindow};
