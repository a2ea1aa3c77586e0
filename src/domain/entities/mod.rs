//! Core domain entities.
//!
//! - [`Link`] - A short name registered against a destination URL
//! - [`ClickStats`] - Click counters keyed by short name
//! - [`StatsEntry`] - One stored counter joined with its registered link

pub mod click_stats;
pub mod link;

pub use click_stats::{ClickStats, StatsEntry, merge_by_key};
pub use link::Link;
