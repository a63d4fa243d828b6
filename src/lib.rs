//! acervo - Educational resource catalog browser
//!
//! A client for a remote catalog of educational resources (documents,
//! videos, links, notes) and playlists.
//!
//! # Architecture
//!
//! Raw records flow one way through the client:
//! - The filter controller turns a search or chip selection into a
//!   generation-tagged fetch ticket
//! - A gateway returns raw resources and playlists (fetched concurrently)
//! - Each resource is classified and normalized into a `CatalogItem`
//! - The aggregator derives Highlights and Most-Liked
//! - The browser swaps the new snapshot in only if its generation is
//!   still current
//!
//! # Modules
//!
//! - `adapters`: Catalog gateways (HTTP service, JSON fixture)
//! - `catalog`: Classification, composite ids, aggregation, filter state
//! - `core`: Fetch cycles and the browsing session
//! - `domain`: Raw records and the display model
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Landing screen
//! acervo home
//!
//! # Filter by a format chip
//! acervo home --filter PDF
//!
//! # Open a detail view
//! acervo open res-17
//! ```

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use adapters::{CatalogGateway, FixtureGateway, GatewayError, HttpGateway};
pub use catalog::{
    aggregate, classify, decode, encode, Aggregation, DecodeError, DisplayKind, FilterController,
    FilterState, ItemId, ItemKind,
};
pub use crate::core::{Browser, FeedSnapshot, FeedStatus, Route};
pub use domain::{CatalogItem, RawPlaylist, RawResource, RawTag};
