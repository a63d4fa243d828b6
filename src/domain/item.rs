//! Unified display model for resources and playlists.

use serde::Serialize;

use crate::catalog::classify::{classify, DisplayKind, IconKey, Palette};
use crate::catalog::id::{ItemId, ItemKind};

use super::raw::{RawPlaylist, RawResource};

/// Subject label when a resource has no tags
pub const DEFAULT_SUBJECT: &str = "General";

/// Subject label shown on playlists
pub const PLAYLIST_SUBJECT: &str = "Playlist";

/// Visibility label shown on playlists
pub const PLAYLIST_VISIBILITY: &str = "Public";

/// Engagement counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub views: u64,
    pub downloads: u64,
    pub likes: u64,
}

/// A display-ready resource or playlist.
///
/// Built fresh from raw records on every fetch cycle. The kind tag lives
/// in the id, and icon/colors are derived from the display kind, so
/// neither can drift from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    id: ItemId,
    title: String,
    subject: String,
    kind: DisplayKind,
    counters: Counters,
    featured: bool,

    /// All tag names (resources only)
    tags: Vec<String>,

    /// Number of resources (playlists only)
    resource_count: Option<u64>,
}

impl CatalogItem {
    /// Normalize a raw resource
    pub fn from_resource(raw: &RawResource) -> Self {
        let class = classify(raw);
        let tags: Vec<String> = raw.tags().iter().map(|t| t.name.clone()).collect();
        let subject = tags
            .first()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        Self {
            id: ItemId::resource(raw.id),
            title: raw.title().to_string(),
            subject,
            kind: class.kind,
            counters: Counters {
                views: raw.views(),
                downloads: raw.downloads(),
                likes: raw.likes(),
            },
            featured: raw.is_featured(),
            tags,
            resource_count: None,
        }
    }

    /// Normalize a raw playlist
    pub fn from_playlist(raw: &RawPlaylist) -> Self {
        Self {
            id: ItemId::playlist(raw.id),
            title: raw.title().to_string(),
            subject: PLAYLIST_SUBJECT.to_string(),
            kind: DisplayKind::Playlist,
            counters: Counters::default(),
            featured: false,
            tags: Vec::new(),
            resource_count: Some(raw.resource_count()),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Primary subject (first tag, or a default)
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    pub fn icon(&self) -> IconKey {
        self.kind.icon()
    }

    pub fn palette(&self) -> Palette {
        self.kind.palette()
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn likes(&self) -> u64 {
        self.counters.likes
    }

    pub fn is_playlist(&self) -> bool {
        self.id.kind == ItemKind::Playlist
    }

    /// Featured flag; always false for playlists
    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn resource_count(&self) -> Option<u64> {
        self.resource_count
    }

    /// Visibility label (playlists only)
    pub fn visibility(&self) -> Option<&'static str> {
        self.is_playlist().then_some(PLAYLIST_VISIBILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::raw::{RawTag, StructuralKind};

    #[test]
    fn test_from_resource() {
        let raw = RawResource {
            id: 2,
            title: Some("Cálculo".to_string()),
            kind: Some(StructuralKind::Upload),
            mime_type: Some("application/pdf".to_string()),
            tags: Some(vec![
                RawTag {
                    id: 1,
                    name: "Matemática".to_string(),
                },
                RawTag {
                    id: 2,
                    name: "3º Ano".to_string(),
                },
            ]),
            views: Some(245),
            likes: Some(34),
            downloads: Some(89),
            featured: Some(true),
        };

        let item = CatalogItem::from_resource(&raw);
        assert_eq!(item.id().to_string(), "res-2");
        assert_eq!(item.subject(), "Matemática");
        assert_eq!(item.kind(), DisplayKind::Pdf);
        assert_eq!(item.icon(), IconKey::Download);
        assert_eq!(item.counters().views, 245);
        assert_eq!(item.likes(), 34);
        assert!(item.is_featured());
        assert!(!item.is_playlist());
        assert_eq!(item.tags().len(), 2);
        assert_eq!(item.visibility(), None);
    }

    #[test]
    fn test_from_resource_defaults() {
        let item = CatalogItem::from_resource(&RawResource {
            id: 4,
            ..Default::default()
        });

        assert_eq!(item.subject(), DEFAULT_SUBJECT);
        assert_eq!(item.kind(), DisplayKind::Document);
        assert_eq!(item.counters(), Counters::default());
    }

    #[test]
    fn test_from_playlist() {
        let item = CatalogItem::from_playlist(&RawPlaylist {
            id: 9,
            title: Some("Física".to_string()),
            resource_count: Some(3),
        });

        assert_eq!(item.id().to_string(), "pl-9");
        assert!(item.is_playlist());
        assert!(!item.is_featured());
        assert_eq!(item.kind(), DisplayKind::Playlist);
        assert_eq!(item.palette().foreground, "text-teal-700");
        assert_eq!(item.counters(), Counters::default());
        assert_eq!(item.resource_count(), Some(3));
        assert_eq!(item.subject(), PLAYLIST_SUBJECT);
        assert_eq!(item.visibility(), Some(PLAYLIST_VISIBILITY));
    }
}
