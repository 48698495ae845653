pub mod config;
pub mod types;
pub mod utils;

pub use config::load_config;
pub use types::{
    AppConfig, KeepAliveConfig, RawgConfig, SearchResponse, ServerConfig, TmdbConfig,
    UpstreamConfig,
};
pub use utils::extract_results;
