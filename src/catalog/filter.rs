//! Search/filter selection state.
//!
//! The controller is the only writer of [`FilterState`]. Every transition
//! bumps a monotonic [`Generation`] and hands back a [`FetchTicket`]; a
//! fetch result is only allowed to replace the displayed lists while its
//! generation is still current.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::classify::DisplayKind;
use crate::domain::RawTag;

/// Active query selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FilterState {
    #[default]
    NoFilter,
    TextQuery(String),
    TagFilter(String),
}

impl FilterState {
    /// Query parameter for this state (`None` means the full catalog)
    pub fn query(&self) -> Option<&str> {
        match self {
            FilterState::NoFilter => None,
            FilterState::TextQuery(text) | FilterState::TagFilter(text) => Some(text),
        }
    }

    /// The active chip label, if any
    pub fn active_chip(&self) -> Option<&str> {
        match self {
            FilterState::TagFilter(label) => Some(label),
            _ => None,
        }
    }
}

/// Monotonic counter identifying a state transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch request produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub query: Option<String>,
}

/// Where a chip comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipSource {
    Format,
    Tag,
}

/// A selectable filter chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub label: String,
    pub source: ChipSource,
    pub active: bool,
}

/// Single-writer owner of the filter state and visible search text
#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
    search_text: String,
    generation: Generation,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Text currently shown in the search box
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether results for `generation` may still be displayed
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Edit the search box without submitting
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Submit the current search text.
    ///
    /// Blank text clears any filter and requests the full catalog.
    pub fn submit_search(&mut self) -> FetchTicket {
        let text = self.search_text.trim().to_string();
        let next = if text.is_empty() {
            FilterState::NoFilter
        } else {
            FilterState::TextQuery(text)
        };
        self.transition(next)
    }

    /// Set the search text and submit it in one step
    pub fn search(&mut self, text: impl Into<String>) -> FetchTicket {
        self.set_search_text(text);
        self.submit_search()
    }

    /// Activate a tag/format chip.
    ///
    /// Re-activating the active chip, or a blank label, clears the filter.
    pub fn set_filter(&mut self, label: &str) -> FetchTicket {
        if label.trim().is_empty() || self.state.active_chip() == Some(label) {
            self.search_text.clear();
            self.transition(FilterState::NoFilter)
        } else {
            self.search_text = label.to_string();
            self.transition(FilterState::TagFilter(label.to_string()))
        }
    }

    /// Re-issue the current query under a fresh generation
    pub fn refresh(&mut self) -> FetchTicket {
        let state = self.state.clone();
        self.transition(state)
    }

    /// Format chips followed by tag chips, with the active one marked
    pub fn chips(&self, tags: &[RawTag]) -> Vec<FilterChip> {
        let active = self.state.active_chip();

        let formats = DisplayKind::FORMATS.iter().map(|kind| FilterChip {
            label: kind.label().to_string(),
            source: ChipSource::Format,
            active: active == Some(kind.label()),
        });

        let tag_chips = tags.iter().map(|tag| FilterChip {
            label: tag.name.clone(),
            source: ChipSource::Tag,
            active: active == Some(tag.name.as_str()),
        });

        formats.chain(tag_chips).collect()
    }

    fn transition(&mut self, next: FilterState) -> FetchTicket {
        self.generation = self.generation.next();
        debug!(generation = %self.generation, state = ?next, "Filter transition");
        self.state = next;

        FetchTicket {
            generation: self.generation,
            query: self.state.query().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = FilterController::new();
        assert_eq!(controller.state(), &FilterState::NoFilter);
        assert_eq!(controller.search_text(), "");
        assert_eq!(controller.generation().value(), 0);
    }

    #[test]
    fn test_submit_text() {
        let mut controller = FilterController::new();
        controller.set_search_text("newton");
        let ticket = controller.submit_search();

        assert_eq!(controller.state(), &FilterState::TextQuery("newton".to_string()));
        assert_eq!(ticket.query.as_deref(), Some("newton"));
        assert!(controller.is_current(ticket.generation));
    }

    #[test]
    fn test_blank_submit_clears() {
        let mut controller = FilterController::new();
        controller.search("algebra");
        let ticket = controller.search("   ");

        assert_eq!(controller.state(), &FilterState::NoFilter);
        assert_eq!(ticket.query, None);
    }

    #[test]
    fn test_blank_chip_clears() {
        let mut controller = FilterController::new();
        controller.set_filter("Física");

        let ticket = controller.set_filter("");
        assert_eq!(controller.state(), &FilterState::NoFilter);
        assert_eq!(controller.search_text(), "");
        assert_eq!(ticket.query, None);

        controller.set_filter(" ");
        assert_eq!(controller.state(), &FilterState::NoFilter);
    }

    #[test]
    fn test_chip_toggle() {
        let mut controller = FilterController::new();

        let first = controller.set_filter("PDF");
        assert_eq!(controller.state(), &FilterState::TagFilter("PDF".to_string()));
        assert_eq!(controller.search_text(), "PDF");
        assert_eq!(first.query.as_deref(), Some("PDF"));

        let second = controller.set_filter("PDF");
        assert_eq!(controller.state(), &FilterState::NoFilter);
        assert_eq!(controller.search_text(), "");
        assert_eq!(second.query, None);
        assert!(second.generation > first.generation);
    }

    #[test]
    fn test_chip_replaces_text_and_vice_versa() {
        let mut controller = FilterController::new();
        controller.search("newton");

        controller.set_filter("Física");
        assert_eq!(controller.state(), &FilterState::TagFilter("Física".to_string()));
        assert_eq!(controller.search_text(), "Física");

        controller.search("leis");
        assert_eq!(controller.state(), &FilterState::TextQuery("leis".to_string()));

        // Text query matching a chip label is not a chip selection
        controller.search("PDF");
        controller.set_filter("PDF");
        assert_eq!(controller.state(), &FilterState::TagFilter("PDF".to_string()));
    }

    #[test]
    fn test_switching_chips() {
        let mut controller = FilterController::new();
        controller.set_filter("PDF");
        controller.set_filter("Video");
        assert_eq!(controller.state(), &FilterState::TagFilter("Video".to_string()));
    }

    #[test]
    fn test_every_transition_supersedes_previous() {
        let mut controller = FilterController::new();
        let a = controller.search("a");
        let b = controller.set_filter("Link");
        let c = controller.refresh();

        assert!(!controller.is_current(a.generation));
        assert!(!controller.is_current(b.generation));
        assert!(controller.is_current(c.generation));
        assert_eq!(c.query.as_deref(), Some("Link"));
    }

    #[test]
    fn test_chips() {
        let mut controller = FilterController::new();
        let tags = vec![RawTag {
            id: 1,
            name: "Matemática".to_string(),
        }];

        let chips = controller.chips(&tags);
        assert_eq!(chips.len(), 6);
        assert_eq!(chips[0].label, "Video");
        assert_eq!(chips[5].source, ChipSource::Tag);
        assert!(chips.iter().all(|c| !c.active));

        controller.set_filter("Matemática");
        let chips = controller.chips(&tags);
        assert!(chips[5].active);
        assert_eq!(chips.iter().filter(|c| c.active).count(), 1);
    }
}
