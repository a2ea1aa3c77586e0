//! # golink-store
//!
//! Persistence core for a go/shortname link service, backed by SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short-name canonicalization, entities and repository traits
//! - **Application Layer** ([`application`]) - Read and write paths over both stores
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and migrations
//! - **Store** ([`store`]) - The handle an embedding HTTP service opens and calls
//!
//! ## Short-name identity
//!
//! Links and click counters are keyed by [`domain::canonical::canonicalize`]:
//! lowercase, with everything but letters and digits removed. `go/Foo.Bar`
//! and `go/foobar` are the same link, and clicks recorded under either
//! spelling land on one counter. Reads report the spelling the link was last
//! saved with.
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> golink_store::error::Result<()> {
//! use golink_store::prelude::*;
//!
//! let store = Store::open("links.db").await?;
//! store.save(&Link::new("B-c", "https://example.com", "foo@bar.com")).await?;
//! store.save_stats(&ClickStats::from([("bc".to_string(), 2)])).await?;
//!
//! let stats = store.load_stats().await?;
//! assert_eq!(stats["B-c"], 2);
//! store.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`config::StoreConfig`] loads pool and logging settings from environment
//! variables; see the [`config`] module.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod store;
pub mod telemetry;

pub use error::StoreError;
pub use store::Store;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::domain::canonical::{CanonicalKey, canonicalize};
    pub use crate::domain::entities::{ClickStats, Link};
    pub use crate::error::StoreError;
    pub use crate::store::Store;
}
