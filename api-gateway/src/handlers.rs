use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use medley_shared::SearchResponse;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::catalog::CatalogClient;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/api/movies", get(trending_movies))
        .route("/api/games", get(trending_games))
        .route("/api/search", get(search))
        .route("/ping", get(ping))
}

pub async fn home() -> Json<Value> {
    Json(json!({ "message": "API Medley integrada com TMDB e RAWG rodando!" }))
}

// Trivial acknowledgement for external uptime monitors, independent of
// the keep-alive loop.
pub async fn ping() -> &'static str {
    "pong"
}

/// Weekly trending movies, returned as a bare array.
pub async fn trending_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, GatewayError> {
    let movies = state.catalog.trending_movies().await?;
    Ok(Json(movies))
}

/// Top-rated games, returned as a bare array.
pub async fn trending_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, GatewayError> {
    let games = state.catalog.trending_games().await?;
    Ok(Json(games))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// Combined movie and game search. Both upstream calls run concurrently;
/// if either fails the whole request fails.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, GatewayError> {
    let term = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or(GatewayError::MissingParam("q"))?;

    info!("Searching catalogs for '{}'", term);

    let (movies, games) = tokio::try_join!(
        state.catalog.search_movies(term),
        state.catalog.search_games(term)
    )?;

    Ok(Json(SearchResponse { movies, games }))
}
