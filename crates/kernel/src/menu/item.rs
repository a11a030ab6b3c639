//! Menu item model: the nodes of the documentation content graph.
//!
//! Nodes are authored as [`NodeDef`] values and become immutable [`MenuItem`]s
//! once a [`RegistryBuilder`](super::RegistryBuilder) assembles them.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Source of builder identities; every [`RegistryBuilder`](super::RegistryBuilder)
/// takes the next value.
static NEXT_OWNER: AtomicUsize = AtomicUsize::new(0);

/// Handle to a node inside a [`MenuRegistry`](super::MenuRegistry).
///
/// Handles are issued by [`RegistryBuilder::add`](super::RegistryBuilder::add)
/// and carry the identity of that builder, so a registry only resolves the
/// handles it issued itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId {
    owner: usize,
    index: usize,
}

impl MenuId {
    pub(crate) fn new(owner: usize, index: usize) -> Self {
        Self { owner, index }
    }

    /// Reserve a fresh builder identity.
    pub(crate) fn next_owner() -> usize {
        NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn owner(self) -> usize {
        self.owner
    }

    /// Position of the node in authoring order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Search keywords attached to a node.
///
/// A `Tags` value is never empty: a node without keywords carries `None`.
/// Keywords are trimmed, deduplicated and kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(BTreeSet<String>);

impl Tags {
    /// Build a tag set, returning `None` when no non-blank keyword remains.
    pub fn new<I, S>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if set.is_empty() { None } else { Some(Self(set)) }
    }

    /// Iterate keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether the exact keyword is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }
}

/// Authoring-time definition of a node.
///
/// Every field is required. An empty `tags` slice means the node has no tags.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef<'a> {
    pub label: &'a str,
    pub href: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub tags: &'a [&'a str],
}

/// A node of the content graph.
///
/// Fields are private: items are immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    label: String,
    href: String,
    description: String,
    category: String,
    tags: Option<Tags>,
    #[serde(skip)]
    see_also: Vec<MenuId>,
}

impl MenuItem {
    pub(crate) fn from_def(def: NodeDef<'_>) -> Self {
        Self {
            label: def.label.trim().to_string(),
            href: def.href.trim().to_string(),
            description: def.description.to_string(),
            category: def.category.to_string(),
            tags: Tags::new(def.tags),
            see_also: Vec::new(),
        }
    }

    pub(crate) fn push_see_also(&mut self, target: MenuId) {
        self.see_also.push(target);
    }

    /// Display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canonical route path; the node's identity.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Grouping label for the top-level menu.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// Outbound cross-references in display order.
    pub fn see_also_ids(&self) -> &[MenuId] {
        &self.see_also
    }
}
