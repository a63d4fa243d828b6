//! Configuration for the catalog client.
//!
//! Configuration sources (highest priority first):
//! 1. CLI flags (applied by the caller on top of the resolved config)
//! 2. Environment variables (ACERVO_API_URL)
//! 3. Config file (.acervo/config.yaml)
//! 4. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .acervo/config.yaml
//! - Falls back to ~/.acervo/config.yaml
//!
//! The access token is never read from the config file; it comes from a
//! CLI flag or ACERVO_TOKEN and is handed to the gateway explicitly.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::http::DEFAULT_API_URL;
use crate::adapters::{PageRequest, PLAYLIST_PAGE_SIZE, RESOURCE_PAGE_SIZE};
use crate::core::Paging;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Catalog service base URL
    pub api_url: Option<String>,
    /// Per-request timeout
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagingConfig {
    pub resource_page_size: Option<u32>,
    pub playlist_page_size: Option<u32>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog service base URL
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Landing-screen page sizes
    pub paging: Paging,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            paging: Paging::default(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".acervo").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".acervo").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge a parsed config file and an env override over the defaults
fn resolve(file: Option<(PathBuf, ConfigFile)>, env_api_url: Option<String>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some((path, config)) = file {
        if let Some(url) = config.gateway.api_url {
            resolved.api_url = url;
        }
        if let Some(secs) = config.gateway.timeout_seconds {
            resolved.timeout = Duration::from_secs(secs);
        }
        resolved.paging = Paging {
            resources: PageRequest::first(
                config.paging.resource_page_size.unwrap_or(RESOURCE_PAGE_SIZE),
            ),
            playlists: PageRequest::first(
                config.paging.playlist_page_size.unwrap_or(PLAYLIST_PAGE_SIZE),
            ),
        };
        resolved.config_file = Some(path);
    }

    if let Some(url) = env_api_url.filter(|u| !u.trim().is_empty()) {
        resolved.api_url = url;
    }

    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve(file, std::env::var("ACERVO_API_URL").ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
