//! Statically authored content for the documentation site.
//!
//! Two independent registries ship with the site:
//! - `usage`: guides grouped by concept ("Core Concepts", "Advanced Concepts", ...)
//! - `samples`: a flat list of runnable examples
//!
//! They overlap in subject matter (both have a "Manage Data" page) but are
//! never merged; each keeps its own hrefs and cross-references.

mod samples;
mod usage;

use tracing::info;

use crate::menu::{MenuRegistry, RegistryError};

pub use samples::samples;
pub use usage::usage;

/// Name of the grouped usage registry.
pub const USAGE: &str = "usage";

/// Name of the flat samples registry.
pub const SAMPLES: &str = "samples";

/// Assemble every shipped registry, in menu order.
pub fn load_all() -> Result<Vec<MenuRegistry>, RegistryError> {
    let registries = vec![usage()?, samples()?];

    for registry in &registries {
        info!(
            registry = %registry.name(),
            nodes = registry.len(),
            categories = registry.categories().len(),
            "content registry loaded"
        );
    }

    Ok(registries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn load_all_in_menu_order() {
        let registries = load_all().unwrap();
        let names: Vec<&str> = registries.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec![USAGE, SAMPLES]);
    }
}
