//! Interactive browse loop.
//!
//! Each input line is one user event:
//! - free text      submit a search
//! - `#<chip>`      toggle a format/tag chip
//! - `open <id>`    open a detail view (`res-17`, `pl-3`)
//! - `chips`        list chips
//! - `refresh`      re-run the current query
//! - `help`, `quit`

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::adapters::CatalogGateway;
use crate::core::Browser;

use super::render;

/// Parsed browse-loop input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Chip(String),
    Open(String),
    Chips,
    Refresh,
    Help,
    Quit,
    Nothing,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return BrowseCommand::Nothing;
        }
        if let Some(chip) = line.strip_prefix('#') {
            return BrowseCommand::Chip(chip.trim().to_string());
        }
        if let Some(id) = line.strip_prefix("open ") {
            return BrowseCommand::Open(id.trim().to_string());
        }

        match line {
            "chips" => BrowseCommand::Chips,
            "refresh" => BrowseCommand::Refresh,
            "help" | "?" => BrowseCommand::Help,
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            text => BrowseCommand::Search(text.to_string()),
        }
    }
}

/// Run the loop until `quit` or end of input
pub async fn run<G: CatalogGateway>(browser: &mut Browser<G>) -> Result<()> {
    browser.load().await;
    show(browser);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        match BrowseCommand::parse(&line) {
            BrowseCommand::Nothing => continue,
            BrowseCommand::Quit => break,
            BrowseCommand::Help => print_help(),
            BrowseCommand::Chips => render::print_chips(&browser.chips()),
            BrowseCommand::Search(text) => {
                browser.search(text).await;
                show(browser);
            }
            BrowseCommand::Chip(label) => {
                browser.set_filter(&label).await;
                show(browser);
            }
            BrowseCommand::Refresh => {
                browser.refresh().await;
                show(browser);
            }
            BrowseCommand::Open(id) => match browser.resolve(&id) {
                Ok(route) => match browser.find(&id) {
                    Ok(Some(item)) => render::print_detail(item),
                    _ => render::print_route(route),
                },
                Err(e) => eprintln!("Cannot open '{}': {}", id, e),
            },
        }
    }

    Ok(())
}

fn show<G: CatalogGateway>(browser: &Browser<G>) {
    println!();
    render::print_home(
        browser.feed(),
        browser.controller().state(),
        browser.controller().search_text(),
        &browser.chips(),
    );
}

fn print_help() {
    println!("\nType text to search, #<chip> to toggle a filter, `open <id>` to navigate.");
    println!("Other commands: `chips`, `refresh`, `quit`.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(BrowseCommand::parse("  "), BrowseCommand::Nothing);
        assert_eq!(BrowseCommand::parse("#PDF"), BrowseCommand::Chip("PDF".to_string()));
        assert_eq!(
            BrowseCommand::parse("open res-17"),
            BrowseCommand::Open("res-17".to_string())
        );
        assert_eq!(BrowseCommand::parse("quit"), BrowseCommand::Quit);
        assert_eq!(BrowseCommand::parse("refresh"), BrowseCommand::Refresh);
        assert_eq!(
            BrowseCommand::parse("leis de newton"),
            BrowseCommand::Search("leis de newton".to_string())
        );
    }
}
