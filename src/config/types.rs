use serde::Deserialize;

/// Process configuration, read once at startup and immutable afterwards.
///
/// `PORT` and `ENTRY_POINT` are the externally documented knobs; the
/// rest exist for local overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Bind address for the listener.
    pub host: String,
    /// Listening port.
    pub port: u16,
    /// Fallback HTML document, relative to the working directory.
    pub entry_point: String,
    /// Include diagnostic detail in 500 bodies.
    pub verbose_errors: bool,
}
