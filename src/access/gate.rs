//! Business-hours middleware.
//! Substitutes the closed notice for every response outside the window.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::access::clock::Clock;
use crate::access::window::{AccessGate, EvaluationResult};
use crate::observability::metrics;
use crate::pages::closed;

/// State required by the gate.
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<AccessGate>,
    pub clock: Arc<dyn Clock>,
}

impl GateState {
    pub fn new(gate: AccessGate, clock: Arc<dyn Clock>) -> Self {
        Self {
            gate: Arc::new(gate),
            clock,
        }
    }
}

pub async fn business_hours_gate(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let now = state.clock.now();

    match state.gate.evaluate(now) {
        EvaluationResult::Proceed => {
            metrics::record_gate_decision("open");
            next.run(req).await
        }
        EvaluationResult::Blocked(at) => {
            tracing::debug!(
                method = %req.method(),
                path = %req.uri().path(),
                now = %at,
                "Outside business hours, serving closed notice"
            );
            metrics::record_gate_decision("closed");
            // Closed is a content substitution, not an error status.
            (StatusCode::OK, closed::render(at)).into_response()
        }
    }
}
