//! Core fetch/display logic.
//!
//! This module contains:
//! - Feed: one concurrent fetch cycle, degraded on failure, aggregated
//! - Browser: the single-writer session applying snapshots by generation

pub mod browser;
pub mod feed;

// Re-export commonly used types
pub use browser::{Browser, Route};
pub use feed::{fetch_feed, FeedSnapshot, FeedSource, FeedStatus, Paging};
