//! Aggregation Integration Tests
//!
//! Highlights/Most-Liked derivation from raw records, including the
//! ordering, padding and stability properties.

use acervo::catalog::{aggregate, visible, HIGHLIGHT_TARGET};
use acervo::domain::{CatalogItem, RawPlaylist, RawResource, StructuralKind};
use proptest::prelude::*;

fn resource(
    id: u64,
    kind: StructuralKind,
    mime: Option<&str>,
    featured: bool,
    likes: i64,
) -> RawResource {
    RawResource {
        id,
        title: Some(format!("Resource {}", id)),
        kind: Some(kind),
        mime_type: mime.map(str::to_string),
        likes: Some(likes),
        featured: Some(featured),
        ..Default::default()
    }
}

fn playlist(id: u64) -> RawPlaylist {
    RawPlaylist {
        id,
        title: Some(format!("Playlist {}", id)),
        resource_count: Some(3),
    }
}

fn normalize(
    resources: &[RawResource],
    playlists: &[RawPlaylist],
) -> (Vec<CatalogItem>, Vec<CatalogItem>) {
    (
        resources.iter().map(CatalogItem::from_resource).collect(),
        playlists.iter().map(CatalogItem::from_playlist).collect(),
    )
}

fn ids(items: &[CatalogItem]) -> Vec<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}

#[test]
fn test_landing_scenario() {
    let raw_resources = vec![
        resource(1, StructuralKind::Note, None, false, 2),
        resource(2, StructuralKind::Upload, Some("application/pdf"), true, 10),
    ];
    let raw_playlists = vec![playlist(9)];

    let (resources, playlists) = normalize(&raw_resources, &raw_playlists);
    let agg = aggregate(&resources, &playlists);

    assert_eq!(ids(&agg.highlights), vec!["pl-9", "res-2", "res-1"]);
    assert_eq!(ids(&agg.most_liked), vec!["res-2", "res-1"]);

    // Display layer sees the same three cards
    assert_eq!(visible(&agg.highlights).len(), 3);
    assert_eq!(agg.highlights[1].kind().label(), "PDF");
    assert_eq!(agg.highlights[2].kind().label(), "Note");
}

#[test]
fn test_empty_catalog_is_not_an_error() {
    let agg = aggregate(&[], &[]);
    assert!(agg.highlights.is_empty());
    assert!(agg.most_liked.is_empty());
}

#[test]
fn test_playlist_counters_are_zero() {
    let (_, playlists) = normalize(&[], &[playlist(1)]);
    let agg = aggregate(&[], &playlists);

    let counters = agg.highlights[0].counters();
    assert_eq!((counters.views, counters.likes, counters.downloads), (0, 0, 0));
}

fn arb_resources() -> impl Strategy<Value = Vec<(bool, i64)>> {
    prop::collection::vec((any::<bool>(), 0i64..5), 0..12)
}

proptest! {
    #[test]
    fn prop_highlights_order_and_padding(specs in arb_resources(), playlist_count in 0usize..6) {
        let raw_resources: Vec<RawResource> = specs
            .iter()
            .enumerate()
            .map(|(i, (featured, likes))| {
                resource(i as u64, StructuralKind::Url, None, *featured, *likes)
            })
            .collect();
        let raw_playlists: Vec<RawPlaylist> = (0..playlist_count as u64).map(playlist).collect();

        let (resources, playlists) = normalize(&raw_resources, &raw_playlists);
        let agg = aggregate(&resources, &playlists);

        let (featured, others): (Vec<CatalogItem>, Vec<CatalogItem>) =
            resources.iter().cloned().partition(|r| r.is_featured());
        let p = playlists.len();
        let f = featured.len();

        // Playlists first, then featured, in input order
        prop_assert_eq!(&agg.highlights[..p], &playlists[..]);
        prop_assert_eq!(&agg.highlights[p..p + f], &featured[..]);

        // Padding only below the target, from non-featured in order
        let padding = &agg.highlights[p + f..];
        if p + f >= HIGHLIGHT_TARGET {
            prop_assert!(padding.is_empty());
        } else {
            let expected = (HIGHLIGHT_TARGET - p - f).min(others.len());
            prop_assert_eq!(padding, &others[..expected]);
        }
        prop_assert!(agg.highlights.len() >= HIGHLIGHT_TARGET.min(p + f + others.len()));

        // No duplicates
        let mut seen: Vec<String> = ids(&agg.highlights);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), agg.highlights.len());
    }

    #[test]
    fn prop_most_liked_stable(specs in arb_resources()) {
        let raw_resources: Vec<RawResource> = specs
            .iter()
            .enumerate()
            .map(|(i, (featured, likes))| {
                resource(i as u64, StructuralKind::Note, None, *featured, *likes)
            })
            .collect();

        let (resources, _) = normalize(&raw_resources, &[]);
        let agg = aggregate(&resources, &[]);

        prop_assert_eq!(agg.most_liked.len(), resources.len());
        for pair in agg.most_liked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.likes() >= b.likes());
            if a.likes() == b.likes() {
                // ids were assigned in input order
                prop_assert!(a.id().id < b.id().id);
            }
        }
    }
}
