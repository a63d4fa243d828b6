//! Offline gateway backed by a JSON catalog snapshot.
//!
//! The file uses the service's wire format:
//!
//! ```json
//! {
//!   "resources": [{ "id": 1, "titulo": "...", "estrutura": "NOTA" }],
//!   "playlists": [{ "id": 9, "titulo": "...", "quantidade_recursos": 3 }],
//!   "tags": [{ "id": 1, "nome": "Matemática" }]
//! }
//! ```
//!
//! Keyword search mimics the service: case-insensitive substring match
//! against title, tag names and format label.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CatalogGateway, GatewayError, PageRequest};
use crate::catalog::classify::classify;
use crate::domain::{Page, RawPlaylist, RawResource, RawTag};

/// In-memory catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureCatalog {
    #[serde(default)]
    pub resources: Vec<RawResource>,

    #[serde(default)]
    pub playlists: Vec<RawPlaylist>,

    #[serde(default)]
    pub tags: Vec<RawTag>,
}

impl FixtureCatalog {
    /// Resources matching a keyword
    pub fn search(&self, query: &str) -> Vec<&RawResource> {
        let query_lower = query.to_lowercase();

        self.resources
            .iter()
            .filter(|r| {
                r.title().to_lowercase().contains(&query_lower)
                    || r.tags().iter().any(|t| t.name.to_lowercase().contains(&query_lower))
                    || classify(r).kind.label().to_lowercase() == query_lower
            })
            .collect()
    }
}

/// Gateway serving a [`FixtureCatalog`]
pub struct FixtureGateway {
    catalog: FixtureCatalog,
}

impl FixtureGateway {
    pub fn new(catalog: FixtureCatalog) -> Self {
        Self { catalog }
    }

    /// Load a snapshot from disk
    pub async fn load(path: &Path) -> Result<Self, GatewayError> {
        let content = tokio::fs::read_to_string(path).await?;
        let catalog = serde_json::from_str(&content)?;
        Ok(Self::new(catalog))
    }
}

fn paginate<T: Clone>(items: Vec<&T>, page: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = (page.page.saturating_sub(1) as usize).saturating_mul(page.per_page as usize);

    Page {
        items: items
            .into_iter()
            .skip(start)
            .take(page.per_page as usize)
            .cloned()
            .collect(),
        total: Some(total),
    }
}

#[async_trait]
impl CatalogGateway for FixtureGateway {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn resources(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<RawResource>, GatewayError> {
        let matches = match query.filter(|q| !q.trim().is_empty()) {
            Some(q) => self.catalog.search(q.trim()),
            None => self.catalog.resources.iter().collect(),
        };
        Ok(paginate(matches, page))
    }

    async fn playlists(&self, page: PageRequest) -> Result<Page<RawPlaylist>, GatewayError> {
        Ok(paginate(self.catalog.playlists.iter().collect(), page))
    }

    async fn tags(&self) -> Result<Vec<RawTag>, GatewayError> {
        Ok(self.catalog.tags.clone())
    }

    async fn create_tag(&self, _name: &str) -> Result<RawTag, GatewayError> {
        Err(GatewayError::Unavailable(
            "fixture catalogs are read-only".to_string(),
        ))
    }
}
