//! Node page handler.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{MethodRouter, get};

use crate::error::{AppError, AppResult};
use crate::menu::MenuId;
use crate::state::AppState;

/// GET route rendering the node `id` of the registry at `registry_index`.
pub fn route(registry_index: usize, id: MenuId) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move {
        node_page(&state, registry_index, id)
    })
}

fn node_page(state: &AppState, registry_index: usize, id: MenuId) -> AppResult<Html<String>> {
    let registry = state
        .registries()
        .get(registry_index)
        .ok_or(AppError::NotFound)?;

    let html = state.theme().render_node(registry, id)?;
    Ok(Html(html))
}
