use chrono::Utc;

use streamflix_domain::id::{AccountId, ContentId};

use crate::domain::repository::{ContentRepository, ProgressRepository};
use crate::domain::types::{ProgressView, WatchProgress};
use crate::error::CatalogServiceError;

// ── GetProgress ──────────────────────────────────────────────────────────────

pub struct GetProgressUseCase<P: ProgressRepository> {
    pub progress: P,
}

impl<P: ProgressRepository> GetProgressUseCase<P> {
    /// A never-written key reads as zero progress, not as an error.
    pub async fn execute(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<ProgressView, CatalogServiceError> {
        Ok(self
            .progress
            .get(account_id, content_id)
            .await?
            .map(ProgressView::from)
            .unwrap_or_default())
    }
}

// ── UpsertProgress ───────────────────────────────────────────────────────────

pub struct UpsertProgressInput {
    pub watched_seconds: u32,
    pub total_seconds: u32,
}

pub struct UpsertProgressUseCase<P: ProgressRepository, C: ContentRepository> {
    pub progress: P,
    pub contents: C,
}

impl<P: ProgressRepository, C: ContentRepository> UpsertProgressUseCase<P, C> {
    /// Replace the record for (account, content) wholesale. `watched_seconds`
    /// is stored as given, even past `total_seconds`.
    pub async fn execute(
        &self,
        account_id: AccountId,
        content_id: ContentId,
        input: UpsertProgressInput,
    ) -> Result<(), CatalogServiceError> {
        if !self.contents.exists(content_id).await? {
            return Err(CatalogServiceError::ContentNotFound);
        }
        let record = WatchProgress {
            account_id,
            content_id,
            watched_seconds: input.watched_seconds,
            total_seconds: input.total_seconds,
            last_watched: Utc::now(),
        };
        self.progress.upsert(&record).await
    }
}
