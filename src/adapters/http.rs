//! HTTP gateway for the catalog service.
//!
//! Endpoints:
//! - GET  /recursos/get_all?page=&per_page=[&palavra_chave=]
//! - GET  /playlists/get_all?page=&per_page=
//! - GET  /tags/get_all
//! - POST /tags/create
//!
//! Auth: optional Bearer token, passed in by the caller

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{CatalogGateway, GatewayError, PageRequest};
use crate::domain::{Page, RawPlaylist, RawResource, RawTag};

/// Default catalog service
pub const DEFAULT_API_URL: &str = "https://acervomestrebackend.onrender.com";

/// Catalog service client
pub struct HttpGateway {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

/// Body for tag creation
#[derive(Debug, Serialize)]
struct NewTag<'a> {
    nome: &'a str,
}

impl HttpGateway {
    /// Create a new client
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Build an endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(self.endpoint(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(self.endpoint(path)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .timeout(self.timeout)
            .header("Content-Type", "application/json");

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON body, failing on non-2xx
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Query parameters for the resource listing
fn resource_params(query: Option<&str>, page: PageRequest) -> Vec<(&'static str, String)> {
    let mut params = page_params(page);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        params.push(("palavra_chave", q.to_string()));
    }
    params
}

fn page_params(page: PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.page.to_string()),
        ("per_page", page.per_page.to_string()),
    ]
}

#[async_trait]
impl CatalogGateway for HttpGateway {
    fn name(&self) -> &str {
        "http"
    }

    async fn resources(
        &self,
        query: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<RawResource>, GatewayError> {
        debug!(?query, page = page.page, "GET resources");
        let request = self
            .get("recursos/get_all")
            .query(&resource_params(query, page));
        self.send(request).await
    }

    async fn playlists(&self, page: PageRequest) -> Result<Page<RawPlaylist>, GatewayError> {
        debug!(page = page.page, "GET playlists");
        let request = self.get("playlists/get_all").query(&page_params(page));
        self.send(request).await
    }

    async fn tags(&self) -> Result<Vec<RawTag>, GatewayError> {
        self.send(self.get("tags/get_all")).await
    }

    async fn create_tag(&self, name: &str) -> Result<RawTag, GatewayError> {
        let request = self.post("tags/create").json(&NewTag { nome: name });
        self.send(request).await
    }
}
