//! Diagnostic request handlers.
//!
//! Each handler is a pure transformation of the request into a response
//! body, content type and status code. None of them touch shared state.

use std::collections::BTreeMap;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::json;

/// Largest request body the echo endpoint reproduces.
const ECHO_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Shared stylesheet for the HTML diagnostic pages.
const PAGE_STYLE: &str = r#"<head>
<style type="text/css">
    table {
        border-collapse: collapse;
        border-spacing: 0;
    }

    tr:nth-child(odd) {
        background-color: #f0f0f0;
    }

    tr:first-of-type {
        border-top: 1px solid #c0c0c0;
    }

    td {
        font-family: arial, sans-serif;
        padding: 5px 10px;
        border-bottom: 1px solid #c0c0c0;
    }
</style>
</head>"#;

fn table_row(page: &mut String, key: &str, value: &str) {
    page.push_str(r#"<tr><td style="width: 400px;">"#);
    page.push_str(key);
    page.push_str("</td><td>");
    page.push_str(value);
    page.push_str("</td></tr>");
}

/// Reflect the request back at the caller: one table row per header value
/// (iteration order is not guaranteed), then the body verbatim.
pub async fn echo(request: Request<Body>) -> Html<String> {
    let (parts, body) = request.into_parts();

    let mut page = String::from("<html>");
    page.push_str(PAGE_STYLE);
    page.push_str("<table>");
    for (name, value) in parts.headers.iter() {
        table_row(
            &mut page,
            name.as_str(),
            &String::from_utf8_lossy(value.as_bytes()),
        );
    }
    page.push_str("</table>");

    page.push_str("<pre>");
    if let Ok(bytes) = to_bytes(body, ECHO_BODY_LIMIT).await {
        page.push_str(&String::from_utf8_lossy(&bytes));
    }
    page.push_str("</pre>");

    page.push_str("</html>");
    Html(page)
}

/// Dump the process environment, one row per variable, sorted ascending
/// by name.
pub async fn env() -> Html<String> {
    let vars: BTreeMap<String, String> = std::env::vars().collect();

    let mut page = String::from("<html>");
    page.push_str(PAGE_STYLE);
    page.push_str("<table>");
    for (name, value) in &vars {
        table_row(&mut page, name, value);
    }
    page.push_str("</table>");
    page.push_str("</html>");

    Html(page)
}

/// Fixed readiness payload. No actual probing happens; if this responds,
/// the server is up.
pub async fn healthcheck() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
