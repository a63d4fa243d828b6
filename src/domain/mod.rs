//! Domain types for the catalog client.
//!
//! - Raw records: what the catalog service sends
//! - CatalogItem: the unified display model built from them

pub mod item;
pub mod raw;

// Re-export commonly used types
pub use item::{CatalogItem, Counters, DEFAULT_SUBJECT};
pub use raw::{Page, RawPlaylist, RawResource, RawTag, StructuralKind};
