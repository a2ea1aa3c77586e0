//! Error type shared by every store operation.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the link and stats stores.
///
/// Nothing is retried internally; callers decide their own retry policy.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No link is registered under the canonical form of `short`.
    #[error("link not found: {short}")]
    NotFound { short: String },

    /// Query or transaction failure reported by the database.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A stored row could not be decoded into a domain value.
    #[error("stored data is invalid: {0}")]
    InvalidData(String),

    /// Applying a stats batch would overflow the counter for `short`.
    #[error("click count overflow for {short}")]
    CountOverflow { short: String },

    /// The store could not be opened or its schema could not be established.
    #[error("failed to open store at {}: {source}", path.display())]
    Init {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub fn not_found(short: impl Into<String>) -> Self {
        Self::NotFound {
            short: short.into(),
        }
    }

    pub fn init(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Init {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for failures of the underlying storage engine,
    /// including undecodable rows.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::InvalidData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Foo.Bar");
        assert!(err.is_not_found());
        assert!(!err.is_storage());
        assert_eq!(err.to_string(), "link not found: Foo.Bar");
    }

    #[test]
    fn test_storage_from_sqlx() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(err.is_storage());
        assert!(err.to_string().starts_with("storage error"));
    }

    #[test]
    fn test_init_includes_path() {
        let err = StoreError::init("/nope/links.db", "unable to open database file");
        assert!(matches!(err, StoreError::Init { .. }));
        assert!(err.to_string().contains("/nope/links.db"));
    }
}
