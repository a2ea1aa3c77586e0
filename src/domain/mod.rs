//! Domain layer containing entities, the canonicalizer and repository contracts.
//!
//! # Architecture
//!
//! - [`canonical`] - Canonical form of short names, shared by every component
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on SQLite; the traits are implemented in
//! [`crate::infrastructure::persistence`].

pub mod canonical;
pub mod entities;
pub mod repositories;
