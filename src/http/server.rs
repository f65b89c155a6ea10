//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the page handler
//! - Serve static assets ahead of the access gate
//! - Wire up middleware (request ID, tracing, timeout, security headers)
//! - Bind server to listener and stop on shutdown

use axum::{
    body::Body,
    extract::State,
    http::{Method, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::access::{business_hours_gate, AccessGate, Clock, GateState, SystemClock};
use crate::config::SiteConfig;
use crate::http::request::{make_span, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::routing::SiteRouter;
use crate::security::headers::with_security_headers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<SiteRouter>,
}

/// HTTP server for the site.
pub struct SiteServer {
    router: Router,
    config: SiteConfig,
}

impl SiteServer {
    /// Create a server that reads the system clock in the configured zone.
    pub fn new(config: SiteConfig) -> Self {
        let clock = Arc::new(SystemClock::new(config.schedule.timezone));
        Self::with_clock(config, clock)
    }

    /// Create a server with an explicit clock.
    pub fn with_clock(config: SiteConfig, clock: Arc<dyn Clock>) -> Self {
        let state = AppState {
            router: Arc::new(SiteRouter::site()),
        };
        let gate = GateState::new(AccessGate::default(), clock);

        let router = Self::build_router(&config, state, gate);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState, gate: GateState) -> Router {
        let pages = Router::new()
            .route("/", any(page_handler))
            .route("/{*path}", any(page_handler))
            .fallback(page_handler)
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, business_hours_gate));

        let app = if config.static_files.enabled {
            let assets = ServeDir::new(&config.static_files.dir)
                .append_index_html_on_directories(false)
                .call_fallback_on_method_not_allowed(true)
                .fallback(pages);
            Router::new().fallback_service(assets)
        } else {
            pages
        };

        let app = app.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(make_span::<Body>))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        );

        if config.security.enable_headers {
            with_security_headers(app)
        } else {
            app
        }
    }

    /// The assembled router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server is running on http://{}", addr);
        tracing::info!(
            timezone = %self.config.schedule.timezone,
            "Application is available Monday-Friday, 9 AM - 5 PM"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Renders the page for any request the gate let through.
async fn page_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let start_time = Instant::now();
    let page = state.router.resolve(&method, uri.path());
    let (status, document) = page.render();

    tracing::debug!(
        method = %method,
        path = %uri.path(),
        page = page.name(),
        status = status.as_u16(),
        "Serving page"
    );
    metrics::record_request(method.as_str(), status.as_u16(), page.name(), start_time);

    (status, document).into_response()
}
