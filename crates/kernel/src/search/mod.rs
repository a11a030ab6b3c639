//! Tag search over menu items.
//!
//! Matching is case-insensitive. A query is split on whitespace and a node
//! matches when every term is a prefix of one of its tags or a substring of
//! its label. Results keep input order; there is no ranking.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::menu::MenuItem;

/// Search results for a query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// Search query used.
    pub query: String,
    /// Matching items, in input order.
    pub results: Vec<&'a MenuItem>,
}

/// Split a query into lowercase terms.
fn terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn term_matches(item: &MenuItem, term: &str) -> bool {
    let tag_hit = item
        .tags()
        .is_some_and(|tags| tags.iter().any(|t| t.to_lowercase().starts_with(term)));

    tag_hit || item.label().to_lowercase().contains(term)
}

/// Find the nodes matching every term of `query`.
///
/// A blank query matches nothing.
pub fn search<'a, I>(nodes: I, query: &str) -> SearchResults<'a>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let terms = terms(query);

    let results: Vec<&MenuItem> = if terms.is_empty() {
        Vec::new()
    } else {
        nodes
            .into_iter()
            .filter(|item| terms.iter().all(|term| term_matches(item, term)))
            .collect()
    };

    debug!(query = %query, matches = results.len(), "tag search");

    SearchResults {
        query: query.trim().to_string(),
        results,
    }
}

/// Sorted, distinct tags across `nodes`, for a tag cloud.
pub fn all_tags<'a, I>(nodes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let set: BTreeSet<&str> = nodes
        .into_iter()
        .filter_map(MenuItem::tags)
        .flat_map(|tags| tags.iter())
        .collect();

    set.into_iter().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::{MenuRegistry, NodeDef, RegistryBuilder};

    fn registry() -> MenuRegistry {
        let mut b = RegistryBuilder::new("docs");
        b.add(NodeDef {
            label: "Layers",
            href: "/usage/layers",
            description: "",
            category: "Core Concepts",
            tags: &["layers", "z-index"],
        });
        b.add(NodeDef {
            label: "Data Isolation",
            href: "/usage/data-isolation",
            description: "",
            category: "Advanced Concepts",
            tags: &["data", "isolation", "layers"],
        });
        b.add(NodeDef {
            label: "Installation",
            href: "/usage/installation",
            description: "",
            category: "Getting Started",
            tags: &[],
        });
        b.build().unwrap()
    }

    fn hrefs<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.results.iter().map(|i| i.href()).collect()
    }

    #[test]
    fn tag_prefix_matches_in_input_order() {
        let registry = registry();
        let results = search(registry.items(), "LAY");
        assert_eq!(
            hrefs(&results),
            vec!["/usage/layers", "/usage/data-isolation"]
        );
    }

    #[test]
    fn all_terms_must_match() {
        let registry = registry();
        let results = search(registry.items(), "layers isolation");
        assert_eq!(hrefs(&results), vec!["/usage/data-isolation"]);
    }

    #[test]
    fn label_substring_matches_untagged_nodes() {
        let registry = registry();
        let results = search(registry.items(), "install");
        assert_eq!(hrefs(&results), vec!["/usage/installation"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let registry = registry();
        assert!(search(registry.items(), "   ").results.is_empty());
        assert_eq!(search(registry.items(), " data ").query, "data");
    }

    #[test]
    fn all_tags_sorted_and_distinct() {
        let registry = registry();
        assert_eq!(
            all_tags(registry.items()),
            vec!["data", "isolation", "layers", "z-index"]
        );
    }
}
