//! Canonical form of short names.
//!
//! Every component that compares or keys short names goes through
//! [`canonicalize`], so link uniqueness and stats merging can never disagree.
//!
//! # Rules
//!
//! 1. Each char is lowercased with the Unicode default case mapping
//!    (`char::to_lowercase`), which does not depend on locale.
//! 2. Only chars satisfying `char::is_alphanumeric` are kept. Hyphens, dots,
//!    whitespace, underscores, slashes and all other punctuation are dropped.
//!
//! `"B-c"`, `"b.c"` and `"bc"` therefore share the key `"bc"`.

use std::fmt;

/// Maps a short name to the key used for identity and aggregation.
///
/// Pure and total: the empty string maps to the empty string.
pub fn canonicalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// A short name already reduced to canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Canonicalizes `short` and wraps the result.
    pub fn new(short: &str) -> Self {
        Self(canonicalize(short))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalKey> for String {
    fn from(key: CanonicalKey) -> Self {
        key.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
