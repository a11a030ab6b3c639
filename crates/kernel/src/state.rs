//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content;
use crate::menu::MenuRegistry;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything inside is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Content registries in menu order.
    registries: Vec<MenuRegistry>,

    /// Theme engine for page rendering.
    theme: ThemeEngine,
}

impl AppState {
    /// Assemble the shipped content registries and the theme.
    pub fn new(config: &Config) -> Result<Self> {
        let registries = content::load_all().context("failed to assemble content registries")?;
        let theme = ThemeEngine::new(config.template_dir.as_deref(), &config.site_title)
            .context("failed to initialize theme engine")?;

        info!(
            registries = registries.len(),
            nodes = registries.iter().map(MenuRegistry::len).sum::<usize>(),
            "application state ready"
        );

        Ok(Self::from_parts(registries, theme))
    }

    /// Build state from already assembled parts.
    pub fn from_parts(registries: Vec<MenuRegistry>, theme: ThemeEngine) -> Self {
        Self {
            inner: Arc::new(AppStateInner { registries, theme }),
        }
    }

    /// All registries, in menu order.
    pub fn registries(&self) -> &[MenuRegistry] {
        &self.inner.registries
    }

    /// Get a registry by name.
    pub fn registry(&self, name: &str) -> Option<&MenuRegistry> {
        self.inner.registries.iter().find(|r| r.name() == name)
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }
}
