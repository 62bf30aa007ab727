#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use streamflix_domain::account::AccountRole;
use streamflix_domain::id::{AccountId, ContentId};

use crate::domain::types::{Account, Content, ContentFilter, Favorite, WatchProgress};
use crate::error::CatalogServiceError;

/// Account directory.
pub trait AccountRepository: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, CatalogServiceError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CatalogServiceError>;
    /// Insert a new account. A login that is already taken yields
    /// `EmailTaken`, including when a concurrent insert wins the race.
    async fn insert(&self, account: &Account) -> Result<(), CatalogServiceError>;
    async fn count(&self) -> Result<u64, CatalogServiceError>;
    async fn count_by_role(&self, role: AccountRole) -> Result<u64, CatalogServiceError>;
}

/// Content directory.
pub trait ContentRepository: Send + Sync {
    async fn exists(&self, id: ContentId) -> Result<bool, CatalogServiceError>;
    async fn find_by_id(&self, id: ContentId) -> Result<Option<Content>, CatalogServiceError>;
    /// Batched lookup. Unknown ids are skipped; order is unspecified.
    async fn find_by_ids(&self, ids: &[ContentId]) -> Result<Vec<Content>, CatalogServiceError>;
    async fn list(&self, filter: &ContentFilter) -> Result<Vec<Content>, CatalogServiceError>;
    /// Distinct categories, sorted.
    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError>;
    async fn create(&self, content: &Content) -> Result<(), CatalogServiceError>;
    /// Replace a stored item. Returns `false` if no row matched.
    async fn update(&self, content: &Content) -> Result<bool, CatalogServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: ContentId) -> Result<bool, CatalogServiceError>;
    async fn count(&self) -> Result<u64, CatalogServiceError>;
}

/// Playback positions keyed by (account, content).
pub trait ProgressRepository: Send + Sync {
    /// Atomic insert-or-replace on the composite key.
    async fn upsert(&self, progress: &WatchProgress) -> Result<(), CatalogServiceError>;
    async fn get(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<Option<WatchProgress>, CatalogServiceError>;
    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<WatchProgress>, CatalogServiceError>;
    async fn count(&self) -> Result<u64, CatalogServiceError>;
}

/// Account bookmarks.
pub trait FavoriteRepository: Send + Sync {
    /// Newest first.
    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Favorite>, CatalogServiceError>;
    /// Insert unless the (account, content) pair already exists. Returns `true`
    /// if a row was inserted.
    async fn insert_if_absent(&self, favorite: &Favorite) -> Result<bool, CatalogServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<bool, CatalogServiceError>;
    async fn count(&self) -> Result<u64, CatalogServiceError>;
}

/// Process-wide settings.
pub trait SettingsRepository: Send + Sync {
    /// Absent setting means enabled.
    async fn registration_enabled(&self) -> Result<bool, CatalogServiceError>;
    async fn set_registration_enabled(
        &self,
        enabled: bool,
        now: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError>;
}
