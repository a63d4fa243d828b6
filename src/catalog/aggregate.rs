//! Landing-screen result sets: Highlights and Most-Liked.

use serde::Serialize;

use crate::domain::CatalogItem;

/// Minimum number of Highlights before padding stops
pub const HIGHLIGHT_TARGET: usize = 4;

/// Number of cards each landing-screen section shows
pub const DISPLAY_LIMIT: usize = 4;

/// Output of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub highlights: Vec<CatalogItem>,
    pub most_liked: Vec<CatalogItem>,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty() && self.most_liked.is_empty()
    }
}

/// Derive Highlights and Most-Liked from normalized items.
///
/// Highlights: every playlist, then featured resources, then (only while
/// below [`HIGHLIGHT_TARGET`]) non-featured resources, all in received
/// order. The result is not truncated; see [`visible`].
///
/// Most-Liked: resources only, stable-sorted by descending likes.
pub fn aggregate(resources: &[CatalogItem], playlists: &[CatalogItem]) -> Aggregation {
    let resources: Vec<&CatalogItem> = resources.iter().filter(|r| !r.is_playlist()).collect();

    let mut highlights: Vec<CatalogItem> = playlists.to_vec();
    highlights.extend(resources.iter().filter(|r| r.is_featured()).map(|r| (*r).clone()));

    if highlights.len() < HIGHLIGHT_TARGET {
        let missing = HIGHLIGHT_TARGET - highlights.len();
        highlights.extend(
            resources
                .iter()
                .filter(|r| !r.is_featured())
                .take(missing)
                .map(|r| (*r).clone()),
        );
    }

    let mut most_liked: Vec<CatalogItem> = resources.into_iter().cloned().collect();
    // sort_by is stable, so equal like counts keep received order
    most_liked.sort_by(|a, b| b.likes().cmp(&a.likes()));

    Aggregation {
        highlights,
        most_liked,
    }
}

/// Display slice of a result set
pub fn visible(items: &[CatalogItem]) -> &[CatalogItem] {
    &items[..items.len().min(DISPLAY_LIMIT)]
}
