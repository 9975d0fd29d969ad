//! HTTP response builders
//!
//! All terminal responses the dispatcher can produce: file content,
//! entry-document fallback, Not Found, and Internal Server Error.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response for an existing file, with full content headers.
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    last_modified: Option<&str>,
    filename: &str,
) -> Response<Full<Bytes>> {
    let length = content.len();
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", length)
        .header(
            "Content-Disposition",
            format!("inline; filename=\"{filename}\""),
        );

    if let Some(date) = last_modified {
        builder = builder.header("Last-Modified", date);
    }

    builder
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying the entry document.
pub fn build_entry_response(content: Vec<u8>) -> Response<Full<Bytes>> {
    let length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("entry", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 response naming the requested path.
///
/// Interpolates the URL path only, HTML-escaped; the resolved
/// filesystem location never reaches the body.
pub fn build_404_response(request_path: &str) -> Response<Full<Bytes>> {
    let shown = escape_html(request_path);
    let body = format!("<h1>Not Found</h1>\n<p><code>{shown}</code></p>\n");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("Not Found")))
        })
}

/// Build 500 response for a read failure on an existing file.
///
/// `verbose` adds the error's debug form as a trace block; the terse
/// variant carries the message only.
pub fn build_500_response(err: &std::io::Error, verbose: bool) -> Response<Full<Bytes>> {
    let mut body = format!("<h1>Internal Server Error</h1>\n<div><pre><code>{err}</code></pre></div>\n");
    if verbose {
        body.push_str(&format!("<div><pre><code>{err:?}</code></pre></div>\n"));
    }
    body.push_str("<div><small><em>Powered by Ukiyo</em></small></div>\n");

    Response::builder()
        .status(500)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Minimal HTML escape for request-controlled text in error bodies.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn file_response_headers() {
        let resp = build_file_response(
            b"body".to_vec(),
            "text/css",
            Some("Thu, 01 Jan 1970 00:00:00 GMT"),
            "style.css",
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "4");
        assert_eq!(
            resp.headers()["Last-Modified"],
            "Thu, 01 Jan 1970 00:00:00 GMT"
        );
        assert_eq!(
            resp.headers()["Content-Disposition"],
            "inline; filename=\"style.css\""
        );
    }

    #[test]
    fn file_response_without_mtime_omits_last_modified() {
        let resp = build_file_response(b"x".to_vec(), "text/plain; charset=utf-8", None, "x.txt");
        assert!(resp.headers().get("Last-Modified").is_none());
    }

    #[tokio::test]
    async fn not_found_names_the_request_path() {
        let resp = build_404_response("/missing.js");
        assert_eq!(resp.status(), 404);
        assert!(body_string(resp).await.contains("/missing.js"));
    }

    #[tokio::test]
    async fn not_found_escapes_markup_in_the_path() {
        let resp = build_404_response("/<script>alert(1)</script>.js");
        let body = body_string(resp).await;
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;.js"));
    }

    #[tokio::test]
    async fn server_error_detail_is_gated() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let verbose = body_string(build_500_response(&err, true)).await;
        let terse = body_string(build_500_response(&err, false)).await;

        assert!(verbose.contains("denied"));
        assert!(verbose.contains("PermissionDenied"));
        assert!(terse.contains("denied"));
        assert!(!terse.contains("PermissionDenied"));
    }

    #[tokio::test]
    async fn entry_response_is_html() {
        let resp = build_entry_response(b"<html>app</html>".to_vec());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "16");
        assert_eq!(body_string(resp).await, "<html>app</html>");
    }
}
