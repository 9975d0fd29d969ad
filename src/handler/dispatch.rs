//! Request dispatch
//!
//! Per-request decision tree: existing file → content responder,
//! missing asset-looking path → Not Found, anything else → entry-point
//! fallback. Stateless; every request is an independent run.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use tokio::fs;

use crate::config::ServerContext;
use crate::handler::{client_ip, resolve, respond};
use crate::http;
use crate::logger;

/// Hyper service entry point. Never fails; every outcome, filesystem
/// errors included, becomes one of the defined responses.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: Arc<ServerContext>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let client = client_ip::derive(req.headers(), peer_addr);
    Ok(dispatch(req.uri().path(), &client, &ctx).await)
}

/// Route a URL path to exactly one responder.
///
/// The HTTP method is not consulted; every request is answered with GET
/// semantics.
pub async fn dispatch(path: &str, client: &str, ctx: &ServerContext) -> Response<Full<Bytes>> {
    let resolved = resolve::resolve(path, &ctx.root);

    // A failed stat of any kind means "no file here".
    let meta = fs::metadata(&resolved.path).await.ok();

    match meta {
        Some(meta) if meta.is_file() => {
            respond::serve_file(&resolved.path, &meta, client, path, ctx).await
        }
        _ if resolved.is_asset() => {
            logger::log_request_line(client, 404, path, None);
            http::build_404_response(path)
        }
        _ => respond::serve_entry(client, path, ctx).await,
    }
}
