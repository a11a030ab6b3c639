//! Theme engine and page rendering.
//!
//! Consumes the navigation model ([`crate::menu`]) and turns category indexes,
//! nodes and search results into HTML via Tera templates, with template
//! suggestion resolution and optional on-disk overrides.

mod engine;
mod templates;

pub use engine::{SharedThemeEngine, ThemeEngine};
