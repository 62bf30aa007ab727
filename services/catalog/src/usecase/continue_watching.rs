use std::collections::HashMap;

use streamflix_domain::id::{AccountId, ContentId};

use crate::domain::repository::{ContentRepository, ProgressRepository};
use crate::domain::types::{Content, WatchProgress};
use crate::error::CatalogServiceError;

/// An item the account started but has not finished.
#[derive(Debug, Clone)]
pub struct ContinueWatchingEntry {
    pub content: Content,
    pub progress: WatchProgress,
}

pub struct ListContinueWatchingUseCase<P: ProgressRepository, C: ContentRepository> {
    pub progress: P,
    pub contents: C,
}

impl<P: ProgressRepository, C: ContentRepository> ListContinueWatchingUseCase<P, C> {
    /// Records inside the 5%-95% band whose content still exists, most
    /// recently watched first. Equal timestamps keep repository order.
    pub async fn execute(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<ContinueWatchingEntry>, CatalogServiceError> {
        let in_band: Vec<WatchProgress> = self
            .progress
            .list_by_account(account_id)
            .await?
            .into_iter()
            .filter(WatchProgress::in_continue_watching_band)
            .collect();
        if in_band.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<ContentId> = in_band.iter().map(|p| p.content_id).collect();
        let mut contents: HashMap<ContentId, Content> = self
            .contents
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut entries: Vec<ContinueWatchingEntry> = in_band
            .into_iter()
            .filter_map(|progress| {
                // (account, content) is unique, so each content is taken once.
                let content = contents.remove(&progress.content_id)?;
                Some(ContinueWatchingEntry { content, progress })
            })
            .collect();

        entries.sort_by(|a, b| b.progress.last_watched.cmp(&a.progress.last_watched));
        Ok(entries)
    }
}
