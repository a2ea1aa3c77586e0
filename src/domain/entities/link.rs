//! Link entity representing a registered short name.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::canonical::CanonicalKey;

/// A short name mapped to a destination URL.
///
/// `short` is kept exactly as registered; identity is the canonical form of
/// it (see [`Link::key`]). Timestamps are persisted with one-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub short: String,
    pub long: String,
    #[serde(default)]
    pub owner: String,
    pub created: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}

impl Link {
    /// Creates a link stamped with the current time.
    pub fn new(short: impl Into<String>, long: impl Into<String>, owner: impl Into<String>) -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            short: short.into(),
            long: long.into(),
            owner: owner.into(),
            created: now,
            last_edit: now,
        }
    }

    /// Canonical key this link occupies.
    pub fn key(&self) -> CanonicalKey {
        CanonicalKey::new(&self.short)
    }

    /// Returns true if `short` names the same slot as this link.
    pub fn matches(&self, short: &str) -> bool {
        self.key() == CanonicalKey::new(short)
    }
}
