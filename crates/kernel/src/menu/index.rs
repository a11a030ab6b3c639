//! Category index for top-level menu rendering.

use std::collections::HashMap;

use serde::Serialize;

use super::item::MenuItem;

/// One category bucket: its label and the nodes declared with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub items: Vec<&'a MenuItem>,
}

/// Ordered mapping from category label to nodes.
///
/// Categories appear in first-seen order; nodes keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryIndex<'a> {
    groups: Vec<CategoryGroup<'a>>,
}

impl<'a> CategoryIndex<'a> {
    /// Nodes in the named category, if any node declared it.
    pub fn get(&self, category: &str) -> Option<&[&'a MenuItem]> {
        self.groups
            .iter()
            .find(|g| g.name == category)
            .map(|g| g.items.as_slice())
    }

    /// Category labels in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for CategoryIndex<'a> {
    type Item = CategoryGroup<'a>;
    type IntoIter = std::vec::IntoIter<CategoryGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group nodes by their `category` field.
///
/// Accepts the whole registry or any subsequence of it.
pub fn group_by_category<'a, I>(nodes: I) -> CategoryIndex<'a>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for node in nodes {
        let category = node.category();
        match positions.get(category) {
            Some(&pos) => groups[pos].items.push(node),
            None => {
                positions.insert(category, groups.len());
                groups.push(CategoryGroup {
                    name: category,
                    items: vec![node],
                });
            }
        }
    }

    CategoryIndex { groups }
}
