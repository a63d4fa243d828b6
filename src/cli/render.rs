//! Terminal rendering of the landing screen and detail views.

use crate::catalog::{FilterChip, FilterState};
use crate::core::{FeedSnapshot, FeedStatus, Route};
use crate::domain::CatalogItem;

const RULE_WIDTH: usize = 80;
const TITLE_WIDTH: usize = 40;

/// Truncate to `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Render the landing screen
pub fn print_home(
    feed: &FeedSnapshot,
    state: &FilterState,
    search_text: &str,
    chips: &[FilterChip],
) {
    match state {
        FilterState::NoFilter => println!("Search: (all content)"),
        FilterState::TextQuery(_) => println!("Search: \"{}\"", search_text),
        FilterState::TagFilter(label) => println!("Filter: [{}]", label),
    }
    print_chips(chips);
    println!();

    match feed.status {
        FeedStatus::Loading => {
            println!("Loading...");
            return;
        }
        FeedStatus::Unavailable => {
            println!("Nothing could be loaded from the catalog. Try again with `refresh`.");
            return;
        }
        FeedStatus::Ready | FeedStatus::Empty => {}
    }

    print_section("HIGHLIGHTS", feed.visible_highlights(), "No content found.");
    println!();
    print_section("MOST LIKED", feed.visible_most_liked(), "No resources found.");

    if !feed.failures.is_empty() {
        let failed: Vec<&str> = feed.failures.iter().map(|f| f.label()).collect();
        eprintln!("\n[partial results: {} unavailable]", failed.join(", "));
    }
}

/// Render the filter chips on one line, active chip bracketed
pub fn print_chips(chips: &[FilterChip]) {
    let rendered: Vec<String> = chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label)
            } else {
                chip.label.clone()
            }
        })
        .collect();
    println!("Chips: {}", rendered.join(" | "));
}

fn print_section(title: &str, items: &[CatalogItem], empty_message: &str) {
    println!("{}", title);
    println!("{}", "-".repeat(RULE_WIDTH));

    if items.is_empty() {
        println!("  {}", empty_message);
        return;
    }

    println!(
        "{:<10} {:<10} {:<14} {:<40} {:>5}",
        "ID", "TYPE", "SUBJECT", "TITLE", "LIKES"
    );
    for item in items {
        println!(
            "{:<10} {:<10} {:<14} {:<40} {:>5}",
            item.id().to_string(),
            item.kind().label(),
            truncate(item.subject(), 14),
            truncate(item.title(), TITLE_WIDTH),
            item.likes()
        );
    }
}

/// Render a detail view for a displayed item
pub fn print_detail(item: &CatalogItem) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("  ID: {}", item.id());
    println!("  Title: {}", item.title());
    println!("  Type: {}", item.kind());
    println!(
        "  Icon: {} ({} / {})",
        item.icon().as_str(),
        item.palette().background,
        item.palette().foreground
    );

    if item.is_playlist() {
        println!("  Visibility: {}", item.visibility().unwrap_or_default());
        println!("  Resources: {}", item.resource_count().unwrap_or_default());
    } else {
        println!("  Subject: {}", item.subject());
        if !item.tags().is_empty() {
            println!("  Tags: {}", item.tags().join(", "));
        }
        let counters = item.counters();
        println!(
            "  Views: {}  Likes: {}  Downloads: {}",
            counters.views, counters.likes, counters.downloads
        );
        if item.is_featured() {
            println!("  Featured");
        }
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Render a route whose item is not on the landing screen
pub fn print_route(route: Route) {
    match route {
        Route::Resource(id) => {
            println!("Resource detail #{} (not on the current landing screen)", id)
        }
        Route::Playlist(id) => {
            println!("Playlist detail #{} (not on the current landing screen)", id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("Introdução ao Cálculo", 10), "Introdu...");
        assert_eq!(truncate("abc", 2), "...");
    }
}
