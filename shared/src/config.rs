use crate::types::{
    AppConfig, KeepAliveConfig, RawgConfig, ServerConfig, TmdbConfig, UpstreamConfig,
};
use anyhow::Result;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use std::env;

pub fn load_config() -> Result<AppConfig> {
    // Load .env file if present
    dotenv().ok();

    let settings = Config::builder()
        // Default configuration file
        .add_source(File::with_name("config/default").required(false))
        // Environment-specific configuration file
        .add_source(
            File::with_name(&format!(
                "config/{}",
                env::var("ENV").unwrap_or_else(|_| "development".to_string())
            ))
            .required(false),
        )
        // Environment variables with MEDLEY_ prefix, e.g.
        // MEDLEY_SERVER__PORT, MEDLEY_TMDB__API_KEY
        .add_source(
            Environment::with_prefix("MEDLEY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // Unprefixed variables honored for deployment convenience: hosting
    // platforms inject PORT, and the provider keys are usually stored
    // under their conventional names.
    if let Ok(port) = env::var("PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }
    if let Ok(key) = env::var("TMDB_API_KEY") {
        config.tmdb.api_key = key;
    }
    if let Ok(key) = env::var("RAWG_API_KEY") {
        config.rawg.api_key = key;
    }

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<()> {
    if config.tmdb.api_key.is_empty() {
        return Err(anyhow::anyhow!("TMDB API key cannot be empty"));
    }

    if config.rawg.api_key.is_empty() {
        return Err(anyhow::anyhow!("RAWG API key cannot be empty"));
    }

    if config.keep_alive.enabled && config.keep_alive.self_url.is_empty() {
        return Err(anyhow::anyhow!(
            "keep_alive.self_url must be set when the keep-alive pinger is enabled"
        ));
    }

    Ok(())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tmdb: TmdbConfig::default(),
            rawg: RawgConfig::default(),
            upstream: UpstreamConfig::default(),
            keep_alive: KeepAliveConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: String::new(),
            language: "pt-BR".to_string(),
        }
    }
}

impl Default for RawgConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.rawg.io/api".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            self_url: String::new(),
            interval_secs: 240,
        }
    }
}
