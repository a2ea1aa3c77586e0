//! Click counters keyed by short name.

use std::collections::{BTreeMap, HashMap};

use crate::domain::canonical::canonicalize;
use crate::error::{Result, StoreError};

/// Click counts keyed by short name.
///
/// On input the keys may be any spelling of a short name. On output from
/// [`crate::Store::load_stats`] they are display forms.
pub type ClickStats = HashMap<String, u64>;

/// A stored counter joined with the link registered at its key, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsEntry {
    /// Canonical key the counter is stored under.
    pub key: String,
    /// Short name of the link registered at `key`.
    pub short: Option<String>,
    pub clicks: u64,
}

impl StatsEntry {
    /// Registered short name when present, the canonical key otherwise.
    pub fn display_form(&self) -> &str {
        self.short.as_deref().unwrap_or(&self.key)
    }
}

/// Folds observations into per-canonical-key totals.
///
/// Entries whose names canonicalize identically are summed. Totals come back
/// ordered by key so writes happen in a stable order. Returns
/// [`StoreError::CountOverflow`] if a total does not fit in a stored counter.
pub fn merge_by_key(observations: &ClickStats) -> Result<BTreeMap<String, u64>> {
    let mut merged = BTreeMap::new();

    for (short, &count) in observations {
        let total: &mut u64 = merged.entry(canonicalize(short)).or_insert(0);
        *total = total
            .checked_add(count)
            .filter(|&sum| i64::try_from(sum).is_ok())
            .ok_or_else(|| StoreError::CountOverflow {
                short: short.clone(),
            })?;
    }

    Ok(merged)
}
