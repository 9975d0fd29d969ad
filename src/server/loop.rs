// Accept loop
// Takes connections off the listener and hands each to its own task.

use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::ServerContext;
use crate::logger;

/// Run the accept loop until the process is killed.
///
/// Accept errors (aborted handshakes, descriptor exhaustion) do not
/// terminate the loop; each one is logged and accepting resumes.
pub async fn run_accept_loop(
    listener: TcpListener,
    ctx: Arc<ServerContext>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, Arc::clone(&ctx));
            }
            Err(err) => {
                logger::log_accept_error(&err);
            }
        }
    }
}
