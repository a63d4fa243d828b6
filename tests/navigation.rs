//! Navigation Integration Tests
//!
//! Composite id resolution against a fixture-backed browser.

use acervo::adapters::FixtureGateway;
use acervo::catalog::{decode, encode, DecodeError, ItemId, ItemKind};
use acervo::core::{Browser, Paging, Route};
use tempfile::TempDir;

const FIXTURE: &str = r#"{
  "resources": [
    {"id": 17, "titulo": "Leis de Newton", "estrutura": "UPLOAD", "mime_type": "video/mp4",
     "tags": [{"id": 1, "nome": "Física"}], "curtidas": 8, "is_destaque": true},
    {"id": 3, "titulo": "Resumo", "estrutura": "NOTA"}
  ],
  "playlists": [
    {"id": 3, "titulo": "Matemática - 3º Ano", "quantidade_recursos": 2}
  ],
  "tags": [{"id": 1, "nome": "Física"}]
}"#;

async fn fixture_browser(temp: &TempDir) -> Browser<FixtureGateway> {
    let path = temp.path().join("catalog.json");
    tokio::fs::write(&path, FIXTURE).await.unwrap();

    let gateway = FixtureGateway::load(&path).await.unwrap();
    let mut browser = Browser::new(gateway, Paging::default());
    browser.load().await;
    browser
}

#[test]
fn test_decode_scenarios() {
    assert_eq!(decode("res-17"), Ok(ItemId::new(ItemKind::Resource, 17)));
    assert_eq!(decode("pl-3"), Ok(ItemId::new(ItemKind::Playlist, 3)));
    assert!(matches!(decode("xyz"), Err(DecodeError::NoDigits(_))));
}

#[test]
fn test_encode_decode_round_trip() {
    for kind in [ItemKind::Resource, ItemKind::Playlist] {
        for id in [0, 1, 17, u64::MAX] {
            assert_eq!(decode(&encode(kind, id)), Ok(ItemId::new(kind, id)));
        }
    }
}

#[tokio::test]
async fn test_resolve_routes() {
    let temp = TempDir::new().unwrap();
    let browser = fixture_browser(&temp).await;

    assert_eq!(browser.resolve("res-17"), Ok(Route::Resource(17)));
    assert_eq!(browser.resolve("pl-3"), Ok(Route::Playlist(3)));
    assert!(browser.resolve("xyz").is_err());
}

#[tokio::test]
async fn test_same_numeric_id_different_kinds() {
    let temp = TempDir::new().unwrap();
    let browser = fixture_browser(&temp).await;

    let resource = browser.find("res-3").unwrap().unwrap();
    let playlist = browser.find("pl-3").unwrap().unwrap();

    assert!(!resource.is_playlist());
    assert_eq!(resource.title(), "Resumo");
    assert!(playlist.is_playlist());
    assert_eq!(playlist.title(), "Matemática - 3º Ano");
}

#[tokio::test]
async fn test_find_displayed_item() {
    let temp = TempDir::new().unwrap();
    let browser = fixture_browser(&temp).await;

    let item = browser.find("res-17").unwrap().unwrap();
    assert_eq!(item.kind().label(), "Video");
    assert_eq!(item.subject(), "Física");
    assert!(item.is_featured());

    assert!(browser.find("res-404").unwrap().is_none());
    assert!(browser.find("nothing").is_err());
}

#[tokio::test]
async fn test_format_chip_against_fixture() {
    let temp = TempDir::new().unwrap();
    let mut browser = fixture_browser(&temp).await;

    let feed = browser.set_filter("Video").await;
    let ids: Vec<String> = feed.most_liked.iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["res-17"]);
}
