//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link registration and lookup
//! - [`StatsRepository`] - Click counter aggregation
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for service tests. See
//! integration tests in `tests/repository_*.rs` for the SQLite behavior.

pub mod link_repository;
pub mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
