//! Filesystem browsing fallback.
//!
//! # Responsibilities
//! - Map request paths onto the process's root filesystem
//! - Render directories as a sorted link listing
//! - Serve file contents with an extension-derived content type

use std::path::{Component, Path, PathBuf};

use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for FilesError {
    fn into_response(self) -> Response {
        match self {
            FilesError::NotFound => {
                (StatusCode::NOT_FOUND, "404 page not found").into_response()
            }
            FilesError::Io(e) => {
                tracing::error!(error = %e, "filesystem read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Serve the request path from the root filesystem: directories render a
/// listing, regular files are returned as-is, anything else is 404.
pub async fn serve(uri: Uri) -> Result<Response, FilesError> {
    let path = resolve(uri.path());

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FilesError::NotFound)
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        let listing = directory_listing(&path, uri.path()).await?;
        Ok(listing.into_response())
    } else {
        file_contents(&path).await
    }
}

/// Map a request path onto the filesystem, discarding any component that
/// would walk above the root.
fn resolve(request_path: &str) -> PathBuf {
    let mut path = PathBuf::from("/");
    for component in Path::new(request_path).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
    path
}

async fn directory_listing(dir: &Path, request_path: &str) -> Result<Html<String>, FilesError> {
    let mut entries = Vec::new();
    let mut reader = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        if is_dir {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let base = request_path.trim_end_matches('/');
    let mut page = String::from("<html><pre>\n");
    for name in &entries {
        page.push_str(&format!("<a href=\"{base}/{name}\">{name}</a>\n"));
    }
    page.push_str("</pre></html>");
    Ok(Html(page))
}

async fn file_contents(path: &Path) -> Result<Response, FilesError> {
    let bytes = tokio::fs::read(path).await?;
    let content_type = content_type_for(path);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

/// Best-effort content type from the file extension.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        Some("txt") | Some("log") | Some("md") | Some("toml") | Some("yaml") | Some("yml")
        | Some("conf") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_onto_the_root() {
        assert_eq!(resolve("/"), PathBuf::from("/"));
        assert_eq!(resolve("/etc/hostname"), PathBuf::from("/etc/hostname"));
        assert_eq!(resolve("/etc/"), PathBuf::from("/etc"));
    }

    #[test]
    fn resolve_discards_parent_components() {
        assert_eq!(resolve("/../etc"), PathBuf::from("/etc"));
        assert_eq!(resolve("/tmp/../../etc/passwd"), PathBuf::from("/tmp/etc/passwd"));
    }

    #[test]
    fn content_types_fall_back_to_octet_stream() {
        assert_eq!(content_type_for(Path::new("/a/page.html")), "text/html");
        assert_eq!(content_type_for(Path::new("/a/notes.txt")), "text/plain");
        assert_eq!(
            content_type_for(Path::new("/proc/uptime")),
            "application/octet-stream"
        );
    }
}
