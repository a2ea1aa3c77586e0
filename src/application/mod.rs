//! Application layer services.
//!
//! Services consume repository traits and expose the read and write paths an
//! outer HTTP layer calls. Anything combining links and click stats reports
//! short names in their registered display form, never as canonical keys.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registration and lookup
//! - [`services::stats_service::StatsService`] - Click counters with display-form resolution

pub mod services;
