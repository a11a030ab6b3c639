//! Menu registry - the immutable arena of content nodes.
//!
//! A registry is assembled once by a [`RegistryBuilder`]: nodes are added
//! first, cross-references are declared afterwards, so the see-also graph may
//! contain cycles while construction stays acyclic.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::index::{CategoryIndex, group_by_category};
use super::item::{MenuId, MenuItem, NodeDef};
use super::see_also::{SeeAlso, resolve_see_also};

/// Authoring defects detected while a registry is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry '{registry}': node {id} has an empty label")]
    EmptyLabel { registry: String, id: MenuId },

    #[error("registry '{registry}': node '{label}' has an empty href")]
    EmptyHref { registry: String, label: String },

    #[error("registry '{registry}': href '{href}' is declared by both '{first}' and '{second}'")]
    DuplicateHref {
        registry: String,
        href: String,
        first: String,
        second: String,
    },

    #[error("registry '{registry}': label '{label}' appears twice in category '{category}'")]
    DuplicateLabel {
        registry: String,
        category: String,
        label: String,
    },

    #[error("registry '{registry}': '{href}' lists itself under see also")]
    SelfReference { registry: String, href: String },

    #[error("registry '{registry}': cross-reference uses unknown node {id}")]
    UnknownNode { registry: String, id: MenuId },
}

/// Collects node definitions and cross-references for one registry.
#[derive(Debug)]
pub struct RegistryBuilder {
    name: String,
    /// Identity stamped on every handle this builder issues
    owner: usize,
    items: Vec<MenuItem>,
    /// (from, to) pairs in declaration order
    links: Vec<(MenuId, MenuId)>,
}

impl RegistryBuilder {
    /// Start an empty registry called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: MenuId::next_owner(),
            items: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a node and return its handle.
    pub fn add(&mut self, def: NodeDef<'_>) -> MenuId {
        self.items.push(MenuItem::from_def(def));
        MenuId::new(self.owner, self.items.len() - 1)
    }

    /// Append cross-references from `from` to each of `refs`, in order.
    ///
    /// Repeated calls for the same node append to its list.
    pub fn see_also(&mut self, from: MenuId, refs: &[MenuId]) -> &mut Self {
        self.links.extend(refs.iter().map(|to| (from, *to)));
        self
    }

    /// Validate the definitions and freeze them into a [`MenuRegistry`].
    pub fn build(self) -> Result<MenuRegistry, RegistryError> {
        let Self {
            name,
            owner,
            mut items,
            links,
        } = self;

        let mut hrefs: HashMap<&str, usize> = HashMap::new();
        let mut labels: HashMap<(&str, &str), usize> = HashMap::new();

        for (index, item) in items.iter().enumerate() {
            if item.label().is_empty() {
                return Err(RegistryError::EmptyLabel {
                    registry: name,
                    id: MenuId::new(owner, index),
                });
            }
            if item.href().is_empty() {
                return Err(RegistryError::EmptyHref {
                    registry: name,
                    label: item.label().to_string(),
                });
            }
            if let Some(&first) = hrefs.get(item.href()) {
                return Err(RegistryError::DuplicateHref {
                    registry: name.clone(),
                    href: item.href().to_string(),
                    first: items[first].label().to_string(),
                    second: item.label().to_string(),
                });
            }
            if labels.contains_key(&(item.category(), item.label())) {
                return Err(RegistryError::DuplicateLabel {
                    registry: name.clone(),
                    category: item.category().to_string(),
                    label: item.label().to_string(),
                });
            }
            hrefs.insert(item.href(), index);
            labels.insert((item.category(), item.label()), index);
        }

        for &(from, to) in &links {
            for id in [from, to] {
                if id.owner() != owner || id.index() >= items.len() {
                    return Err(RegistryError::UnknownNode { registry: name, id });
                }
            }
            if from == to {
                return Err(RegistryError::SelfReference {
                    registry: name,
                    href: items[from.index()].href().to_string(),
                });
            }
        }

        for &(from, to) in &links {
            items[from.index()].push_see_also(to);
        }

        debug!(
            registry = %name,
            nodes = items.len(),
            links = links.len(),
            "registry assembled"
        );

        Ok(MenuRegistry { name, owner, items })
    }
}

/// Immutable registry of content nodes.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    name: String,
    owner: usize,
    items: Vec<MenuItem>,
}

impl MenuRegistry {
    /// Registry name (e.g. "usage").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a node by handle; `None` for a handle issued by another builder.
    pub fn get(&self, id: MenuId) -> Option<&MenuItem> {
        if id.owner() != self.owner {
            return None;
        }
        self.items.get(id.index())
    }

    /// All nodes in authoring order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// All nodes with their handles, in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuId, &MenuItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (MenuId::new(self.owner, i), item))
    }

    /// Resolve a node's cross-references to the nodes themselves, in display order.
    pub fn see_also(&self, id: MenuId) -> Vec<&MenuItem> {
        self.get(id)
            .map(|item| {
                item.see_also_ids()
                    .iter()
                    .filter_map(|target| self.get(*target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Link descriptors for a node's "See also" section, or `None` when the
    /// section should not render.
    pub fn resolve_see_also(&self, id: MenuId) -> Option<SeeAlso<'_>> {
        let refs = self.see_also(id);
        resolve_see_also(Some(refs.as_slice()))
    }

    /// Nodes that list `id` under see also, in authoring order, each once.
    pub fn referenced_by(&self, id: MenuId) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.see_also_ids().contains(&id))
            .collect()
    }

    /// Category grouping of the whole registry.
    pub fn categories(&self) -> CategoryIndex<'_> {
        group_by_category(&self.items)
    }

    /// Get node count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
