use serde::{Deserialize, Serialize};
use serde_json::Value;

// Application configuration, loaded once at startup and passed around
// immutably. Defaults live in config.rs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    pub rawg: RawgConfig,
    pub upstream: UpstreamConfig,
    pub keep_alive: KeepAliveConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// Movie catalog provider (TMDB-compatible API)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
}

// Game catalog provider (RAWG-compatible API)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawgConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Timeout applied to every outbound catalog request, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    pub enabled: bool,
    /// Externally reachable base URL of this service, pinged each cycle.
    pub self_url: String,
    /// Wait between the end of one ping and the start of the next.
    pub interval_secs: u64,
}

// Combined search payload: two independent upstream result lists,
// passed through opaquely.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub movies: Vec<Value>,
    pub games: Vec<Value>,
}
