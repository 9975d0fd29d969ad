mod config;
mod handler;
mod http;
mod logger;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use config::{Config, ServerContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Arc::new(ServerContext::new(cfg)?);
    let listener = startup(&ctx).await?;

    logger::log_server_start(&listener.local_addr()?);
    server::run_accept_loop(listener, ctx).await
}

/// Two-phase startup: prove the entry document is readable, then bind.
///
/// Either failure logs and exits non-zero. The port is never bound when
/// the entry document is missing, so a misconfigured process fails fast
/// instead of serving broken fallbacks later.
async fn startup(ctx: &ServerContext) -> Result<TcpListener, Box<dyn std::error::Error>> {
    if let Err(err) = tokio::fs::read(&ctx.entry_path).await {
        logger::log_entry_missing(&ctx.config.entry_point);
        return Err(format!("entry point not readable: {err}").into());
    }

    let addr = ctx.config.socket_addr()?;
    match server::create_listener(addr) {
        Ok(listener) => Ok(listener),
        Err(err) => {
            let suggested = server::suggest_alternate_port(ctx.config.port);
            logger::log_bind_failed(ctx.config.port, suggested, &ctx.config.entry_point, &err);
            Err(err.into())
        }
    }
}
