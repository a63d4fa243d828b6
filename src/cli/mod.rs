//! Command-line interface for acervo.
//!
//! Renders the landing screen, runs the interactive browse loop,
//! resolves composite ids to detail views and manages tags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::{CatalogGateway, FixtureGateway, HttpGateway};
use crate::catalog::decode;
use crate::config::{self, ResolvedConfig};
use crate::core::{Browser, Route};

pub mod browse;
pub mod render;

/// acervo - Educational resource catalog browser
#[derive(Parser, Debug)]
#[command(name = "acervo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog service base URL
    #[arg(long, global = true, env = "ACERVO_API_URL")]
    pub api_url: Option<String>,

    /// Access token sent as a Bearer credential
    #[arg(long, global = true, env = "ACERVO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Serve the catalog from a JSON snapshot instead of the network
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the landing screen (Highlights and Most Liked)
    Home {
        /// Free-text search
        #[arg(short, long, conflicts_with = "filter")]
        query: Option<String>,

        /// Format or tag chip to filter by
        #[arg(short, long)]
        filter: Option<String>,

        /// Print the feed as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog
    Search {
        /// Search text
        query: String,
    },

    /// Browse interactively
    Browse,

    /// Open a resource or playlist by composite id (res-17, pl-3)
    Open {
        /// Composite id
        id: String,
    },

    /// List tags, or create one
    Tags {
        /// Name of a tag to create
        #[arg(long)]
        create: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = self.resolved_config()?;

        match &self.command {
            Commands::Home {
                query,
                filter,
                json,
            } => {
                let browser = self.browser(&config).await?;
                show_home(browser, query.clone(), filter.clone(), *json).await
            }
            Commands::Search { query } => {
                let browser = self.browser(&config).await?;
                show_home(browser, Some(query.clone()), None, false).await
            }
            Commands::Browse => {
                let mut browser = self.browser(&config).await?;
                browse::run(&mut browser).await
            }
            Commands::Open { id } => {
                // Decode before touching the network so a bad id never navigates
                let route = decode(id)
                    .map(Route::from)
                    .with_context(|| format!("Cannot open '{}'", id))?;
                let browser = self.browser(&config).await?;
                open_item(browser, id, route).await
            }
            Commands::Tags { create } => {
                let gateway = self.gateway(&config).await?;
                manage_tags(gateway.as_ref(), create.as_deref()).await
            }
            Commands::Config => show_config(&config, self.token.is_some()),
        }
    }

    /// Cached config with CLI overrides applied
    fn resolved_config(&self) -> Result<ResolvedConfig> {
        let mut resolved = config::config()?.clone();
        if let Some(url) = &self.api_url {
            resolved.api_url = url.clone();
        }
        Ok(resolved)
    }

    async fn gateway(&self, config: &ResolvedConfig) -> Result<Box<dyn CatalogGateway>> {
        if let Some(path) = &self.fixture {
            let gateway = FixtureGateway::load(path)
                .await
                .with_context(|| format!("Failed to load fixture: {}", path.display()))?;
            return Ok(Box::new(gateway));
        }

        Ok(Box::new(HttpGateway::new(
            config.api_url.clone(),
            self.token.clone(),
            config.timeout,
        )))
    }

    async fn browser(&self, config: &ResolvedConfig) -> Result<Browser<Box<dyn CatalogGateway>>> {
        let gateway = self.gateway(config).await?;
        Ok(Browser::new(gateway, config.paging))
    }
}

/// Render the landing screen for a one-shot query or chip
async fn show_home(
    mut browser: Browser<Box<dyn CatalogGateway>>,
    query: Option<String>,
    filter: Option<String>,
    json: bool,
) -> Result<()> {
    browser.load_tags().await;

    match (query, filter) {
        (_, Some(chip)) => browser.set_filter(&chip).await,
        (Some(text), None) => browser.search(text).await,
        (None, None) => browser.refresh().await,
    };

    if json {
        let output = serde_json::to_string_pretty(browser.feed())
            .context("Failed to serialize feed")?;
        println!("{}", output);
        return Ok(());
    }

    render::print_home(
        browser.feed(),
        browser.controller().state(),
        browser.controller().search_text(),
        &browser.chips(),
    );
    Ok(())
}

/// Resolve a composite id against the landing screen
async fn open_item(
    mut browser: Browser<Box<dyn CatalogGateway>>,
    id: &str,
    route: Route,
) -> Result<()> {
    browser.load().await;

    match browser.find(id)? {
        Some(item) => render::print_detail(item),
        None => render::print_route(route),
    }
    Ok(())
}

/// List tags or create one
async fn manage_tags(gateway: &dyn CatalogGateway, create: Option<&str>) -> Result<()> {
    if let Some(name) = create {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Tag name is empty");
        }

        let tag = gateway
            .create_tag(name)
            .await
            .with_context(|| format!("Failed to create tag '{}'", name))?;
        println!("Created tag {} ({})", tag.name, tag.id);
        return Ok(());
    }

    let tags = gateway.tags().await.context("Failed to list tags")?;
    if tags.is_empty() {
        println!("No tags found");
        return Ok(());
    }

    println!("{:<8} {:<40}", "ID", "NAME");
    println!("{}", "-".repeat(50));
    for tag in &tags {
        println!("{:<8} {:<40}", tag.id, tag.name);
    }
    println!("\nTotal: {} tags", tags.len());

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig, has_token: bool) -> Result<()> {
    println!("acervo configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Gateway:");
    println!("  API URL: {}", cfg.api_url);
    println!("  Timeout: {}s", cfg.timeout.as_secs());
    println!("  Token:   {}", if has_token { "(set)" } else { "(none)" });
    println!();
    println!("Paging:");
    println!("  Resources: {} per page", cfg.paging.resources.per_page);
    println!("  Playlists: {} per page", cfg.paging.playlists.per_page);

    Ok(())
}
