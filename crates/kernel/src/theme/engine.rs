//! Theme engine with Tera templates and suggestion resolution.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tera::Tera;
use tracing::debug;

use crate::menu::{MenuId, MenuRegistry};
use crate::search::{SearchResults, all_tags};

use super::templates::BUILTIN;

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
    /// Site name shown in the page header and title.
    site_title: String,
}

impl ThemeEngine {
    /// Create a theme engine from the built-in templates, letting templates in
    /// `template_dir` (if any) replace or extend them.
    pub fn new(template_dir: Option<&Path>, site_title: &str) -> Result<Self> {
        let mut builtin = Tera::default();
        builtin
            .add_raw_templates(BUILTIN)
            .context("failed to parse built-in templates")?;

        let mut tera = match template_dir {
            Some(dir) => {
                let pattern = dir.join("**/*.html");
                let pattern_str = pattern
                    .to_str()
                    .context("invalid template directory path")?;
                // Inheritance is resolved after the built-ins are merged, so an
                // override may extend "page.html".
                let mut tera =
                    Tera::parse(pattern_str).context("failed to load template overrides")?;
                tera.extend(&builtin)
                    .context("failed to merge built-in templates")?;
                tera
            }
            None => builtin,
        };

        Self::register_filters(&mut tera);

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), "loaded templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
            site_title: site_title.to_string(),
        })
    }

    /// Create a theme engine with the built-in templates only.
    pub fn builtin(site_title: &str) -> Result<Self> {
        Self::new(None, site_title)
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Route path to a CSS-friendly token: "/usage/layers" -> "usage-layers"
        tera.register_filter(
            "slug",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let path = tera::try_get_value!("slug", "value", String, value);
                Ok(tera::Value::String(path_slug(&path, "-")))
            },
        );
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached for performance.
    ///
    /// Example suggestions: `["node--usage--layers", "node--usage", "node"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");

        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }
        }

        None
    }

    /// Get page template suggestions based on path.
    ///
    /// `/usage/layers` -> `["page--usage--layers", "page--usage", "page"]`
    pub fn page_suggestions(path: &str) -> Vec<String> {
        Self::suggestions("page", path)
    }

    /// Get node template suggestions based on the node's href.
    pub fn node_suggestions(href: &str) -> Vec<String> {
        Self::suggestions("node", href)
    }

    fn suggestions(base: &str, path: &str) -> Vec<String> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut suggestions: Vec<String> = (1..=segments.len())
            .rev()
            .map(|n| format!("{base}--{}", segments[..n].join("--")))
            .collect();
        suggestions.push(base.to_string());
        suggestions
    }

    fn resolve_or(&self, suggestions: &[String], fallback: &str) -> String {
        let refs: Vec<&str> = suggestions.iter().map(String::as_str).collect();
        self.resolve_template(&refs)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Render the top-level menu of a registry, grouped by category.
    pub fn render_menu(&self, registry: &MenuRegistry, path: &str, title: &str) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("registry", registry.name());
        context.insert("categories", &registry.categories());

        let content = self
            .tera
            .render("menu.html", &context)
            .context("failed to render menu template")?;

        self.render_page(path, title, &content, &mut context)
    }

    /// Render the page of one node, including its "See also" section when it
    /// has cross-references.
    pub fn render_node(&self, registry: &MenuRegistry, id: MenuId) -> Result<String> {
        let item = registry
            .get(id)
            .with_context(|| format!("node {id} not in registry '{}'", registry.name()))?;

        let mut context = tera::Context::new();
        context.insert("registry", registry.name());
        context.insert("item", item);
        context.insert("see_also", &registry.resolve_see_also(id));
        context.insert("referenced_by", &registry.referenced_by(id));

        let template = self.resolve_or(&Self::node_suggestions(item.href()), "node.html");
        let content = self
            .tera
            .render(&template, &context)
            .with_context(|| format!("failed to render node template for {}", item.href()))?;

        self.render_page(item.href(), item.label(), &content, &mut context)
    }

    /// Render search results, or the tag cloud when the query is blank.
    pub fn render_search(
        &self,
        registry: &MenuRegistry,
        results: &SearchResults<'_>,
    ) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("query", &results.query);
        context.insert("results", &results.results);
        context.insert("tags", &all_tags(registry.items()));

        let content = self
            .tera
            .render("search.html", &context)
            .context("failed to render search template")?;

        self.render_page("/search", "Search", &content, &mut context)
    }

    /// Render a full page with content.
    pub fn render_page(
        &self,
        path: &str,
        title: &str,
        content: &str,
        context: &mut tera::Context,
    ) -> Result<String> {
        let template = self.resolve_or(&Self::page_suggestions(path), "page.html");

        context.insert("site_title", &self.site_title);
        context.insert("title", title);
        context.insert("content", content);
        context.insert("path", path);

        self.tera
            .render(&template, context)
            .context("failed to render page template")
    }

    /// Clear the suggestion cache.
    pub fn clear_cache(&self) {
        self.suggestion_cache.clear();
    }
}

/// Join the non-empty segments of `path` with `sep`; the root path is "front".
fn path_slug(path: &str, sep: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "front".to_string()
    } else {
        segments.join(sep)
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}

/// Wrap ThemeEngine in Arc for sharing across handlers.
pub type SharedThemeEngine = Arc<ThemeEngine>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_suggestions() {
        assert_eq!(
            ThemeEngine::page_suggestions("/usage/layers"),
            vec!["page--usage--layers", "page--usage", "page"]
        );
        assert_eq!(ThemeEngine::page_suggestions("/"), vec!["page"]);
    }

    #[test]
    fn test_node_suggestions() {
        assert_eq!(
            ThemeEngine::node_suggestions("/samples/clock"),
            vec!["node--samples--clock", "node--samples", "node"]
        );
    }

    #[test]
    fn test_resolve_template_falls_through_to_base() {
        let engine = ThemeEngine::builtin("Trellis").unwrap();
        assert_eq!(
            engine.resolve_template(&["node--usage--layers", "node"]),
            Some("node.html".to_string())
        );
        assert!(engine.resolve_template(&["missing"]).is_none());
        assert!(engine.resolve_template(&[]).is_none());
    }

    #[test]
    fn test_slug_filter() {
        let mut tera = Tera::default();
        ThemeEngine::register_filters(&mut tera);

        tera.add_raw_template("test", "{{ p | slug }}").unwrap();
        let mut ctx = tera::Context::new();
        ctx.insert("p", "/usage/manage-data");
        assert_eq!(tera.render("test", &ctx).unwrap(), "usage-manage-data");

        ctx.insert("p", "/");
        assert_eq!(tera.render("test", &ctx).unwrap(), "front");
    }
}
