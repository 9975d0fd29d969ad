// Configuration module entry point
// Loads process configuration and builds the shared server context.

mod state;
mod types;

use std::net::SocketAddr;

pub use state::ServerContext;
pub use types::Config;

impl Config {
    /// Load configuration from an optional `ukiyo` config file, then the
    /// environment (`PORT`, `ENTRY_POINT`), then built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("ukiyo").required(false))
            .add_source(config::Environment::default())
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("entry_point", "index.html")?
            .set_default("verbose_errors", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
