//! Catalog aggregation and addressing.
//!
//! - classify: raw resource -> display kind, icon and colors
//! - id: composite `res-N` / `pl-N` identifiers
//! - aggregate: Highlights and Most-Liked result sets
//! - filter: search/filter state machine with fetch generations

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod id;

// Re-export commonly used types
pub use aggregate::{aggregate, visible, Aggregation, DISPLAY_LIMIT, HIGHLIGHT_TARGET};
pub use classify::{classify, Classification, DisplayKind, IconKey, Palette};
pub use filter::{ChipSource, FetchTicket, FilterChip, FilterController, FilterState, Generation};
pub use id::{decode, encode, DecodeError, ItemId, ItemKind};
