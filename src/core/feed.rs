//! One fetch cycle of the landing screen.
//!
//! Issues the resource and playlist requests concurrently, joins them,
//! degrades a failed side to an empty collection, normalizes the raw
//! records and aggregates them into a [`FeedSnapshot`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::adapters::{CatalogGateway, PageRequest, PLAYLIST_PAGE_SIZE, RESOURCE_PAGE_SIZE};
use crate::catalog::{aggregate, visible, FetchTicket, Generation, ItemId};
use crate::domain::CatalogItem;

/// Page sizes for the two landing-screen requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub resources: PageRequest,
    pub playlists: PageRequest,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            resources: PageRequest::first(RESOURCE_PAGE_SIZE),
            playlists: PageRequest::first(PLAYLIST_PAGE_SIZE),
        }
    }
}

/// Which request of a fetch cycle failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    Resources,
    Playlists,
}

impl FeedSource {
    pub fn label(&self) -> &'static str {
        match self {
            FeedSource::Resources => "resources",
            FeedSource::Playlists => "playlists",
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of a fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    /// Nothing fetched yet
    Loading,

    /// At least one list has items
    Ready,

    /// The catalog answered but nothing matched
    Empty,

    /// Both requests failed
    Unavailable,
}

/// Aggregated result of one fetch cycle
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub generation: Generation,
    pub query: Option<String>,
    pub highlights: Vec<CatalogItem>,
    pub most_liked: Vec<CatalogItem>,
    pub status: FeedStatus,
    pub failures: Vec<FeedSource>,
    pub fetched_at: DateTime<Utc>,
}

impl FeedSnapshot {
    /// Placeholder shown before the first fetch completes
    pub fn loading() -> Self {
        Self {
            generation: Generation::default(),
            query: None,
            highlights: Vec::new(),
            most_liked: Vec::new(),
            status: FeedStatus::Loading,
            failures: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Highlights as displayed (capped)
    pub fn visible_highlights(&self) -> &[CatalogItem] {
        visible(&self.highlights)
    }

    /// Most-Liked as displayed (capped)
    pub fn visible_most_liked(&self) -> &[CatalogItem] {
        visible(&self.most_liked)
    }

    /// Look up a displayed item
    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        self.highlights
            .iter()
            .chain(self.most_liked.iter())
            .find(|item| item.id() == id)
    }
}

/// Run one fetch cycle for a ticket
#[instrument(
    skip(gateway, ticket, paging),
    fields(source = gateway.name(), generation = %ticket.generation)
)]
pub async fn fetch_feed<G>(gateway: &G, ticket: &FetchTicket, paging: Paging) -> FeedSnapshot
where
    G: CatalogGateway + ?Sized,
{
    let query = ticket.query.as_deref();

    let (resources, playlists) = tokio::join!(
        gateway.resources(query, paging.resources),
        gateway.playlists(paging.playlists),
    );

    let mut failures = Vec::new();

    let resources = match resources {
        Ok(page) => page.items,
        Err(e) => {
            warn!(error = %e, "Resource fetch failed, continuing without resources");
            failures.push(FeedSource::Resources);
            Vec::new()
        }
    };

    let playlists = match playlists {
        Ok(page) => page.items,
        Err(e) => {
            warn!(error = %e, "Playlist fetch failed, continuing without playlists");
            failures.push(FeedSource::Playlists);
            Vec::new()
        }
    };

    let resources: Vec<CatalogItem> = resources.iter().map(CatalogItem::from_resource).collect();
    let playlists: Vec<CatalogItem> = playlists.iter().map(CatalogItem::from_playlist).collect();

    let aggregation = aggregate(&resources, &playlists);

    let status = if failures.len() == 2 {
        FeedStatus::Unavailable
    } else if aggregation.is_empty() {
        FeedStatus::Empty
    } else {
        FeedStatus::Ready
    };

    debug!(
        resources = resources.len(),
        playlists = playlists.len(),
        highlights = aggregation.highlights.len(),
        ?status,
        "Fetch cycle complete"
    );

    FeedSnapshot {
        generation: ticket.generation,
        query: ticket.query.clone(),
        highlights: aggregation.highlights,
        most_liked: aggregation.most_liked,
        status,
        failures,
        fetched_at: Utc::now(),
    }
}
