//! Trellis test utilities.
//!
//! Helpers for integration testing: registry fixture builders, the reference
//! cross-link scenario, and assertion utilities for the navigation model.

use std::collections::HashMap;

use trellis_kernel::menu::{MenuRegistry, NodeDef, RegistryBuilder, RegistryError};

/// Create a test node with default values.
pub fn test_node(label: &str, href: &str) -> TestNode {
    TestNode {
        label: label.to_string(),
        href: href.to_string(),
        description: format!("About {label}."),
        category: "Core Concepts".to_string(),
        tags: Vec::new(),
    }
}

/// A test node builder for creating registry fixtures.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub label: String,
    pub href: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl TestNode {
    /// Set the category.
    pub fn in_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Add tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }
}

/// A registry fixture builder.
///
/// Cross-references are declared by href for readability; they are turned
/// into handles when the registry is built.
#[derive(Debug, Clone)]
pub struct TestRegistry {
    name: String,
    nodes: Vec<TestNode>,
    links: Vec<(String, Vec<String>)>,
}

impl TestRegistry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(mut self, node: TestNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Declare `from`'s see-also list by href.
    pub fn see_also(mut self, from: &str, to: &[&str]) -> Self {
        self.links.push((
            from.to_string(),
            to.iter().map(|t| t.to_string()).collect(),
        ));
        self
    }

    /// Build the registry.
    ///
    /// # Panics
    ///
    /// Panics when a see-also href does not name a node of this fixture.
    #[allow(clippy::expect_used)]
    pub fn build(self) -> Result<MenuRegistry, RegistryError> {
        let mut builder = RegistryBuilder::new(self.name);
        let mut ids = HashMap::new();

        for node in &self.nodes {
            let tags: Vec<&str> = node.tags.iter().map(String::as_str).collect();
            let id = builder.add(NodeDef {
                label: &node.label,
                href: &node.href,
                description: &node.description,
                category: &node.category,
                tags: &tags,
            });
            ids.entry(node.href.clone()).or_insert(id);
        }

        for (from, to) in &self.links {
            let from_id = *ids.get(from).expect("see_also source not in fixture");
            let to_ids: Vec<_> = to
                .iter()
                .map(|href| *ids.get(href).expect("see_also target not in fixture"))
                .collect();
            builder.see_also(from_id, &to_ids);
        }

        builder.build()
    }
}

/// The reference cross-link scenario: Manage Data sees also Layers,
/// Transform and Data Isolation, in that order.
#[allow(clippy::expect_used)]
pub fn manage_data_registry() -> MenuRegistry {
    TestRegistry::new("usage")
        .node(test_node("Layers", "/usage/layers").with_tags(&["layers"]))
        .node(test_node("Transform", "/usage/transform").with_tags(&["transform"]))
        .node(
            test_node("Data Isolation", "/usage/data-isolation")
                .in_category("Advanced Concepts")
                .with_tags(&["data", "isolation"]),
        )
        .node(
            test_node("Manage Data", "/usage/manage-data")
                .in_category("Additional Concepts")
                .with_tags(&["data", "state"]),
        )
        .see_also(
            "/usage/manage-data",
            &["/usage/layers", "/usage/transform", "/usage/data-isolation"],
        )
        .build()
        .expect("manage data fixture is well formed")
}

/// Invariant checks over a built registry.
pub mod invariants {
    use std::collections::HashSet;

    use trellis_kernel::menu::{CategoryIndex, MenuItem, MenuRegistry};

    /// Assert that no two nodes share an href.
    pub fn unique_hrefs(registry: &MenuRegistry) {
        let mut seen = HashSet::new();
        for item in registry.items() {
            assert!(
                seen.insert(item.href()),
                "duplicate href '{}' in registry '{}'",
                item.href(),
                registry.name()
            );
        }
    }

    /// Assert that no node lists itself under see also.
    pub fn no_self_reference(registry: &MenuRegistry) {
        for (id, item) in registry.iter() {
            assert!(
                !item.see_also_ids().contains(&id),
                "'{}' lists itself under see also",
                item.href()
            );
        }
    }

    /// Assert that present tag sets are non-empty.
    pub fn tags_non_empty(registry: &MenuRegistry) {
        for item in registry.items() {
            if let Some(tags) = item.tags() {
                assert!(
                    tags.iter().next().is_some(),
                    "'{}' has an empty tag set",
                    item.href()
                );
            }
        }
    }

    /// Assert that `index` places every node of `nodes` exactly once, in the
    /// bucket matching its category, keeping input order within buckets.
    pub fn partition(nodes: &[&MenuItem], index: &CategoryIndex<'_>) {
        let total: usize = index.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, nodes.len(), "bucket sizes do not add up to input");

        for group in index.iter() {
            let expected: Vec<&str> = nodes
                .iter()
                .filter(|n| n.category() == group.name)
                .map(|n| n.href())
                .collect();
            let actual: Vec<&str> = group.items.iter().map(|n| n.href()).collect();
            assert_eq!(actual, expected, "bucket '{}' mismatch", group.name);
        }
    }
}

/// Assertion helpers for rendered output and JSON.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `first` occurs before `second` in `haystack`.
    pub fn in_order(haystack: &str, first: &str, second: &str) {
        let a = haystack.find(first);
        let b = haystack.find(second);
        assert!(
            matches!((a, b), (Some(a), Some(b)) if a < b),
            "Expected '{first}' before '{second}'\nActual: {haystack}"
        );
    }
}
