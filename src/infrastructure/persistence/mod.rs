//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against a single SQLite database file.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`SqliteStatsRepository`] - Click counter aggregation
//!
//! [`database::open_pool`] opens the file and applies the embedded migrations.

pub mod database;
pub mod sqlite_link_repository;
pub mod sqlite_stats_repository;

pub use database::open_pool;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_stats_repository::SqliteStatsRepository;
