//! "See also" cross-reference resolution.

use serde::Serialize;

use super::item::MenuItem;

/// Minimal renderable link produced from a cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor<'a> {
    /// Position in the see-also list; stable because the list is never reordered.
    pub key: usize,
    pub href: &'a str,
    pub label: &'a str,
}

/// A non-empty, ordered list of link descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeeAlso<'a> {
    links: Vec<LinkDescriptor<'a>>,
}

impl<'a> SeeAlso<'a> {
    pub fn links(&self) -> &[LinkDescriptor<'a>] {
        &self.links
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkDescriptor<'a>> {
        self.links.iter()
    }
}

impl<'s, 'a> IntoIterator for &'s SeeAlso<'a> {
    type Item = &'s LinkDescriptor<'a>;
    type IntoIter = std::slice::Iter<'s, LinkDescriptor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Turn a see-also list into link descriptors.
///
/// Returns `None` when `refs` is absent or empty: the renderer must then emit
/// nothing at all, not an empty section. Duplicate references are kept.
pub fn resolve_see_also<'a>(refs: Option<&[&'a MenuItem]>) -> Option<SeeAlso<'a>> {
    let refs = refs.filter(|r| !r.is_empty())?;

    let links = refs
        .iter()
        .enumerate()
        .map(|(key, item)| LinkDescriptor {
            key,
            href: item.href(),
            label: item.label(),
        })
        .collect();

    Some(SeeAlso { links })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::item::NodeDef;

    fn node(label: &str, href: &str) -> MenuItem {
        MenuItem::from_def(NodeDef {
            label,
            href,
            description: "",
            category: "Core Concepts",
            tags: &[],
        })
    }

    #[test]
    fn absent_or_empty_suppresses_section() {
        assert!(resolve_see_also(None).is_none());
        assert!(resolve_see_also(Some(&[])).is_none());
    }

    #[test]
    fn single_reference() {
        let layers = node("Layers", "/usage/layers");
        let see_also = resolve_see_also(Some(&[&layers])).unwrap();
        assert_eq!(
            see_also.links(),
            &[LinkDescriptor {
                key: 0,
                href: "/usage/layers",
                label: "Layers",
            }]
        );
    }

    #[test]
    fn duplicates_are_kept_with_positional_keys() {
        let layers = node("Layers", "/usage/layers");
        let transform = node("Transform", "/usage/transform");
        let see_also = resolve_see_also(Some(&[&layers, &transform, &layers])).unwrap();

        let keys: Vec<usize> = see_also.iter().map(|l| l.key).collect();
        let hrefs: Vec<&str> = see_also.iter().map(|l| l.href).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(
            hrefs,
            vec!["/usage/layers", "/usage/transform", "/usage/layers"]
        );
    }

    #[test]
    fn serializes_as_array() {
        let layers = node("Layers", "/usage/layers");
        let see_also = resolve_see_also(Some(&[&layers])).unwrap();
        let json = serde_json::to_string(&see_also).unwrap();
        assert_eq!(
            json,
            r#"[{"key":0,"href":"/usage/layers","label":"Layers"}]"#
        );
    }
}
