//! Top-level menu pages.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::content::{SAMPLES, USAGE};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(usage_menu))
        .route("/samples", get(samples_menu))
}

async fn usage_menu(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_menu(&state, USAGE, "/", "Usage")
}

async fn samples_menu(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_menu(&state, SAMPLES, "/samples", "Samples")
}

fn render_menu(
    state: &AppState,
    registry: &str,
    path: &str,
    title: &str,
) -> AppResult<Html<String>> {
    let registry = state.registry(registry).ok_or(AppError::NotFound)?;
    let html = state.theme().render_menu(registry, path, title)?;
    Ok(Html(html))
}
