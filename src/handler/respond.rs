//! Content and fallback responders
//!
//! Reads run through `tokio::fs`, so a slow disk suspends the request
//! task instead of the worker thread. Files are read as bytes; binary
//! assets round-trip exactly.

use std::fs::Metadata;
use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::ServerContext;
use crate::http::{self, date, mime};
use crate::logger;

/// Serve an existing regular file with full content headers.
pub async fn serve_file(
    file_path: &Path,
    meta: &Metadata,
    client: &str,
    request_path: &str,
    ctx: &ServerContext,
) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            logger::log_request_line(client, 200, request_path, Some(content.len()));
            let content_type = mime::content_type_for(file_path);
            let last_modified = meta.modified().ok().map(date::http_date);
            http::build_file_response(
                content,
                content_type,
                last_modified.as_deref(),
                basename(file_path),
            )
        }
        Err(err) => {
            // The file existed at stat time; permissions or a race took
            // it away. Surfaced to the client as a 500.
            logger::log_request_error(client, 500, request_path, &err);
            http::build_500_response(&err, ctx.config.verbose_errors)
        }
    }
}

/// Serve the configured entry document (the SPA fallback).
pub async fn serve_entry(
    client: &str,
    request_path: &str,
    ctx: &ServerContext,
) -> Response<Full<Bytes>> {
    match fs::read(&ctx.entry_path).await {
        Ok(content) => {
            logger::log_request_line(client, 200, &ctx.config.entry_point, Some(content.len()));
            http::build_entry_response(content)
        }
        Err(_) => {
            logger::log_entry_missing(&ctx.config.entry_point);
            logger::log_request_line(client, 404, request_path, None);
            http::build_404_response(request_path)
        }
    }
}

fn basename(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_takes_final_component() {
        assert_eq!(basename(Path::new("/srv/app/assets/app.js")), "app.js");
        assert_eq!(basename(Path::new("index.html")), "index.html");
        assert_eq!(basename(Path::new("/")), "");
    }
}
