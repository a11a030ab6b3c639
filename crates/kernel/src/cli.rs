//! CLI command implementations.
//!
//! These commands only assemble the content registries; they never start the
//! server or load templates.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::content;
use crate::menu::MenuRegistry;
use crate::routes::validate_hrefs;

/// Print the category index of one registry as a table or as JSON.
pub fn cmd_menu(registry_name: &str, json: bool) -> Result<()> {
    let registries = content::load_all()?;
    let registry = registries
        .iter()
        .find(|r| r.name() == registry_name)
        .with_context(|| {
            let known: Vec<&str> = registries.iter().map(|r| r.name()).collect();
            format!(
                "registry '{registry_name}' not found (known: {})",
                known.join(", ")
            )
        })?;

    if json {
        let out = serde_json::to_string_pretty(&registry.categories())
            .context("failed to serialize category index")?;
        println!("{out}");
    } else {
        print!("{}", format_menu_table(registry));
    }

    Ok(())
}

/// Assemble every registry, check the route surface, and print a summary.
pub fn cmd_check() -> Result<()> {
    let registries = content::load_all().context("content registry is malformed")?;
    validate_hrefs(&registries).context("content hrefs cannot be routed")?;

    print!("{}", format_summary(&registries));
    println!("All registries OK.");
    Ok(())
}

/// Aligned table of a registry's nodes, grouped by category.
// SAFETY: write!() to String is infallible
#[allow(clippy::unwrap_used)]
pub fn format_menu_table(registry: &MenuRegistry) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<22} {:<20} {:<30} {}",
        "CATEGORY", "LABEL", "HREF", "SEE ALSO"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(82)).unwrap();

    for group in registry.categories() {
        for item in group.items {
            writeln!(
                out,
                "{:<22} {:<20} {:<30} {}",
                group.name,
                item.label(),
                item.href(),
                item.see_also_ids().len()
            )
            .unwrap();
        }
    }

    out
}

/// One line per registry with its node and category counts.
// SAFETY: write!() to String is infallible
#[allow(clippy::unwrap_used)]
pub fn format_summary(registries: &[MenuRegistry]) -> String {
    let mut out = String::new();

    for registry in registries {
        writeln!(
            out,
            "{:<10} {:>3} nodes {:>3} categories",
            registry.name(),
            registry.len(),
            registry.categories().len()
        )
        .unwrap();
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn menu_table_lists_every_node() {
        let registry = content::usage().unwrap();
        let table = format_menu_table(&registry);

        assert!(table.starts_with("CATEGORY"));
        // header + rule + one line per node
        assert_eq!(table.lines().count(), registry.len() + 2);
        assert!(table.contains("/usage/manage-data"));
    }

    #[test]
    fn summary_has_one_line_per_registry() {
        let registries = content::load_all().unwrap();
        let summary = format_summary(&registries);
        assert_eq!(summary.lines().count(), 2);
        assert!(summary.starts_with("usage"));
    }

    #[test]
    fn unknown_registry_is_an_error() {
        let err = cmd_menu("blog", false).unwrap_err();
        assert!(err.to_string().contains("registry 'blog' not found"));
    }
}
