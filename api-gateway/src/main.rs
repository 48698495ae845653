use anyhow::Result;
use axum::Router;
use medley_shared::load_config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};

mod catalog;
mod error;
mod handlers;
mod keep_alive;

use catalog::CatalogClient;
use handlers::{catalog_routes, AppState};
use keep_alive::KeepAlivePinger;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = load_config()?;
    info!("Configuration loaded successfully");

    let catalog = Arc::new(CatalogClient::new(&config)?);
    let app_state = AppState { catalog };

    // Keep-alive pinger runs on its own timeline, never touched by
    // request handlers; the handle is held so it lives until exit.
    let _keep_alive = if config.keep_alive.enabled {
        Some(KeepAlivePinger::new(&config.keep_alive).spawn())
    } else {
        None
    };

    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("API Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(app_state: AppState) -> Router {
    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .into_inner();

    catalog_routes().layer(middleware_layer).with_state(app_state)
}
