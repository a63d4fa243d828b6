//! Browsing session for the landing screen.
//!
//! Owns the filter controller, the displayed feed and the tag chips.
//! All mutation goes through `&mut self`, so there is exactly one writer;
//! fetches only borrow the gateway and may be started, awaited and
//! applied in any order. [`Browser::apply`] is the single point where a
//! snapshot replaces the displayed lists, and it refuses snapshots from
//! superseded generations.

use tracing::{debug, info, warn};

use crate::adapters::CatalogGateway;
use crate::catalog::{
    decode, DecodeError, FetchTicket, FilterChip, FilterController, ItemId, ItemKind,
};
use crate::domain::{CatalogItem, RawTag};

use super::feed::{fetch_feed, FeedSnapshot, Paging};

/// Detail screen a composite id navigates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Resource(u64),
    Playlist(u64),
}

impl From<ItemId> for Route {
    fn from(id: ItemId) -> Self {
        match id.kind {
            ItemKind::Resource => Route::Resource(id.id),
            ItemKind::Playlist => Route::Playlist(id.id),
        }
    }
}

/// Landing-screen session
pub struct Browser<G> {
    gateway: G,
    paging: Paging,
    controller: FilterController,
    feed: FeedSnapshot,
    tags: Vec<RawTag>,
}

impl<G: CatalogGateway> Browser<G> {
    pub fn new(gateway: G, paging: Paging) -> Self {
        Self {
            gateway,
            paging,
            controller: FilterController::new(),
            feed: FeedSnapshot::loading(),
            tags: Vec::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    /// Direct access for callers that schedule fetches themselves
    pub fn controller_mut(&mut self) -> &mut FilterController {
        &mut self.controller
    }

    /// Currently displayed snapshot
    pub fn feed(&self) -> &FeedSnapshot {
        &self.feed
    }

    pub fn tags(&self) -> &[RawTag] {
        &self.tags
    }

    /// Format and tag chips with the active one marked
    pub fn chips(&self) -> Vec<FilterChip> {
        self.controller.chips(&self.tags)
    }

    /// Initial load: tags first, then the unfiltered catalog
    pub async fn load(&mut self) -> &FeedSnapshot {
        self.load_tags().await;
        self.refresh().await
    }

    /// Fetch tag chips; failures leave the previous tags in place
    pub async fn load_tags(&mut self) {
        match self.gateway.tags().await {
            Ok(tags) => {
                debug!(count = tags.len(), "Loaded tags");
                self.tags = tags;
            }
            Err(e) => warn!(error = %e, "Failed to load tags"),
        }
    }

    /// Edit the search box without submitting
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.controller.set_search_text(text);
    }

    /// Submit the current search box text
    pub async fn submit_search(&mut self) -> &FeedSnapshot {
        let ticket = self.controller.submit_search();
        self.run(ticket).await
    }

    /// Replace the search text and submit it
    pub async fn search(&mut self, text: impl Into<String>) -> &FeedSnapshot {
        let ticket = self.controller.search(text);
        self.run(ticket).await
    }

    /// Toggle a format/tag chip
    pub async fn set_filter(&mut self, label: &str) -> &FeedSnapshot {
        let ticket = self.controller.set_filter(label);
        self.run(ticket).await
    }

    /// Re-run the current query
    pub async fn refresh(&mut self) -> &FeedSnapshot {
        let ticket = self.controller.refresh();
        self.run(ticket).await
    }

    /// Run a fetch cycle without touching the displayed lists
    pub async fn fetch(&self, ticket: &FetchTicket) -> FeedSnapshot {
        fetch_feed(&self.gateway, ticket, self.paging).await
    }

    /// Swap in a snapshot if its generation is still current.
    ///
    /// Returns whether the snapshot was applied.
    pub fn apply(&mut self, snapshot: FeedSnapshot) -> bool {
        if !self.controller.is_current(snapshot.generation) {
            debug!(
                stale = %snapshot.generation,
                current = %self.controller.generation(),
                "Discarding stale feed snapshot"
            );
            return false;
        }

        info!(
            generation = %snapshot.generation,
            status = ?snapshot.status,
            highlights = snapshot.highlights.len(),
            most_liked = snapshot.most_liked.len(),
            "Feed updated"
        );
        self.feed = snapshot;
        true
    }

    /// Decode a clicked item's composite id into a navigation route
    pub fn resolve(&self, composite: &str) -> Result<Route, DecodeError> {
        decode(composite).map(Route::from)
    }

    /// Find a displayed item by composite id
    pub fn find(&self, composite: &str) -> Result<Option<&CatalogItem>, DecodeError> {
        let id = decode(composite)?;
        Ok(self.feed.find(id))
    }

    async fn run(&mut self, ticket: FetchTicket) -> &FeedSnapshot {
        let snapshot = self.fetch(&ticket).await;
        self.apply(snapshot);
        &self.feed
    }
}
