//! Content graph and navigation model.
//!
//! Registries of [`MenuItem`] nodes are assembled once at startup and provide:
//! - Route paths for the HTTP router (`href`, unique per registry)
//! - Category grouping for the top-level menu
//! - "See also" cross-links between pages
//!
//! Nothing in this module produces markup; see [`crate::theme`].

mod index;
mod item;
mod registry;
mod see_also;

pub use index::{CategoryGroup, CategoryIndex, group_by_category};
pub use item::{MenuId, MenuItem, NodeDef, Tags};
pub use registry::{MenuRegistry, RegistryBuilder, RegistryError};
pub use see_also::{LinkDescriptor, SeeAlso, resolve_see_also};
