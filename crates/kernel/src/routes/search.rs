//! Search route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::content::USAGE;
use crate::error::{AppError, AppResult};
use crate::search::search;
use crate::state::AppState;

/// Create the search router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_html))
        .route("/api/search", get(search_json))
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query string.
    #[serde(default)]
    pub q: String,
}

async fn search_html(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let registry = state.registry(USAGE).ok_or(AppError::NotFound)?;
    let results = search(registry.items(), &query.q);
    let html = state.theme().render_search(registry, &results)?;
    Ok(Html(html))
}

async fn search_json(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let registry = state.registry(USAGE).ok_or(AppError::NotFound)?;
    let results = search(registry.items(), &query.q);
    let value = serde_json::to_value(&results).map_err(anyhow::Error::from)?;
    Ok(Json(value))
}
