//! Access Log Middleware.
//! Records every dispatch before the handler runs.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Log the request method and full URI, then delegate to the wrapped
/// handler. Applies uniformly to every route, including the filesystem
/// fallback.
pub async fn access_log(req: Request<Body>, next: Next) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "request");
    next.run(req).await
}
