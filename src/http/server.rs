//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the diagnostic handlers
//! - Wire up middleware (access log, request traces)
//! - Serve connections until the shutdown signal, then drain

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::files;
use crate::http::handlers;
use crate::http::middleware::access_log::access_log;

/// HTTP server for the diagnostic endpoints.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        Router::new()
            .route("/_/echo", any(handlers::echo))
            .route("/_/env", any(handlers::env))
            .route("/_/healthcheck", any(handlers::healthcheck))
            .fallback(files::serve)
            .layer(axum::middleware::from_fn(access_log))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve connections on the given listener until the shutdown channel
    /// fires, then stop accepting and let in-flight requests finish.
    ///
    /// The drain itself is unbounded here; the lifecycle manager enforces
    /// the deadline.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
