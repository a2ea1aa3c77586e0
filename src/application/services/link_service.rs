//! Link registration and lookup service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// Service for registering, looking up and removing links.
///
/// Short names are passed to the repository unvalidated; shape checks
/// (allowed characters, length) belong to the caller.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Registers `link`, replacing whatever occupies its canonical key.
    ///
    /// The replaced link's spelling of `short` is overwritten too, so later
    /// stats reads report under the new spelling.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self, link), fields(short = %link.short))]
    pub async fn save(&self, link: &Link) -> Result<(), StoreError> {
        self.repository.save(link).await
    }

    /// Loads the link registered under any spelling of `short`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no link occupies the canonical key.
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, short: &str) -> Result<Link, StoreError> {
        self.repository
            .find(short)
            .await?
            .ok_or_else(|| StoreError::not_found(short))
    }

    /// Returns every registered link in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn load_all(&self) -> Result<Vec<Link>, StoreError> {
        self.repository.find_all().await
    }

    /// Removes the link registered under any spelling of `short`.
    ///
    /// Removing a name that is not registered is not an error. Click stats
    /// for the name are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, short: &str) -> Result<(), StoreError> {
        if !self.repository.delete(short).await? {
            tracing::debug!("No link registered, nothing deleted");
        }
        Ok(())
    }

    /// Returns links whose owner matches `owner` exactly.
    ///
    /// No trimming or case folding is applied to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self))]
    pub async fn links_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        self.repository.find_by_owner(owner).await
    }

    /// Returns every link, ordered by short name, for export.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn snapshot(&self) -> Result<Vec<Link>, StoreError> {
        let mut links = self.repository.find_all().await?;
        links.sort_by(|a, b| a.short.cmp(&b.short));
        Ok(links)
    }

    /// Saves every link from a snapshot in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors; no link is saved.
    #[tracing::instrument(skip(self, links), fields(count = links.len()))]
    pub async fn restore(&self, links: &[Link]) -> Result<(), StoreError> {
        if links.is_empty() {
            return Ok(());
        }
        self.repository.save_all(links).await
    }
}
