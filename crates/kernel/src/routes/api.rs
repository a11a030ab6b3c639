//! JSON API for menu consumers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/menu/{registry}", get(menu_json))
}

/// Category index of a registry: `[{"name": ..., "items": [...]}, ...]`.
async fn menu_json(
    State(state): State<AppState>,
    Path(registry): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let registry = state.registry(&registry).ok_or(AppError::NotFound)?;
    let value = serde_json::to_value(registry.categories()).map_err(anyhow::Error::from)?;
    Ok(Json(value))
}
