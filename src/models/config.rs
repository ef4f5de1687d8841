//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_session_capacity() -> usize {
    1024
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Root of the inventory backend, e.g. `http://localhost:9090`.
    pub api_base_url: String,
    pub templates_dir: String,
    /// Cookie signing key; at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_session_capacity")]
    pub session_capacity: usize,
    #[serde(default)]
    pub api_timeout_secs: Option<u64>,
}
