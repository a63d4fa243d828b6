//! Gateway interfaces for the remote catalog service.
//!
//! The core never talks to the network itself; it consumes raw records
//! through [`CatalogGateway`]. Credentials are handed to each gateway
//! explicitly at construction time.

pub mod fixture;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Page, RawPlaylist, RawResource, RawTag};

pub use fixture::{FixtureCatalog, FixtureGateway};
pub use http::HttpGateway;

/// Default page sizes used by the landing screen
pub const RESOURCE_PAGE_SIZE: u32 = 20;
pub const PLAYLIST_PAGE_SIZE: u32 = 10;

/// Which page of a collection to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// First page with the given size
    pub fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }
}

/// Errors from a gateway call
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}

/// Source of raw catalog records
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Human-readable gateway name
    fn name(&self) -> &str;

    /// List resources, optionally filtered by a keyword
    async fn resources(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<RawResource>, GatewayError>;

    /// List playlists
    async fn playlists(&self, page: PageRequest) -> Result<Page<RawPlaylist>, GatewayError>;

    /// List available tags
    async fn tags(&self) -> Result<Vec<RawTag>, GatewayError>;

    /// Create a tag
    async fn create_tag(&self, name: &str) -> Result<RawTag, GatewayError>;
}

#[async_trait]
impl<T: CatalogGateway + ?Sized> CatalogGateway for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn resources(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<RawResource>, GatewayError> {
        (**self).resources(query, page).await
    }

    async fn playlists(&self, page: PageRequest) -> Result<Page<RawPlaylist>, GatewayError> {
        (**self).playlists(page).await
    }

    async fn tags(&self) -> Result<Vec<RawTag>, GatewayError> {
        (**self).tags().await
    }

    async fn create_tag(&self, name: &str) -> Result<RawTag, GatewayError> {
        (**self).create_tag(name).await
    }
}
