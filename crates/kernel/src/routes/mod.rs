//! HTTP route handlers.
//!
//! Every node href of every registry is registered as its own route, so the
//! router is the only place where a path is mapped to a page.

pub mod api;
pub mod health;
pub mod menu;
pub mod node;
pub mod search;

use std::collections::HashSet;

use anyhow::{Result, bail};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::menu::MenuRegistry;
use crate::state::AppState;

/// Paths owned by fixed routes; node hrefs may not reuse them.
const RESERVED_PATHS: [&str; 4] = ["/", "/samples", "/search", "/health"];

/// Build the full application router.
pub fn app(state: AppState) -> Result<Router> {
    let router = Router::new()
        .merge(menu::router())
        .merge(search::router())
        .merge(api::router())
        .merge(health::router())
        .merge(node_router(&state)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Register one GET route per node href.
fn node_router(state: &AppState) -> Result<Router<AppState>> {
    validate_hrefs(state.registries())?;

    let mut router = Router::new();
    for (registry_index, registry) in state.registries().iter().enumerate() {
        for (id, item) in registry.iter() {
            router = router.route(item.href(), node::route(registry_index, id));
        }
        debug!(
            registry = %registry.name(),
            routes = registry.len(),
            "node routes registered"
        );
    }

    Ok(router)
}

/// Check that every href is a well-formed route path that no other route uses.
pub fn validate_hrefs(registries: &[MenuRegistry]) -> Result<()> {
    let mut seen: HashSet<&str> = RESERVED_PATHS.into_iter().collect();

    for registry in registries {
        for item in registry.items() {
            let href = item.href();
            check_route_path(href)?;
            if !seen.insert(href) {
                bail!(
                    "href '{href}' in registry '{}' collides with another route",
                    registry.name()
                );
            }
        }
    }

    Ok(())
}

/// Reject hrefs the router would misread as patterns or refuse outright.
fn check_route_path(href: &str) -> Result<()> {
    if !href.starts_with('/') {
        bail!("href '{href}' must start with '/'");
    }
    if href.starts_with("/api/") {
        bail!("href '{href}' is inside the reserved /api/ prefix");
    }
    if href.contains(['{', '}', '*', ':']) {
        bail!("href '{href}' contains route pattern characters");
    }
    Ok(())
}
