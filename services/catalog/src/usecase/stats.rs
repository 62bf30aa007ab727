use streamflix_domain::account::AccountRole;

use crate::domain::repository::{
    AccountRepository, ContentRepository, FavoriteRepository, ProgressRepository,
};
use crate::domain::types::CatalogStats;
use crate::error::CatalogServiceError;

pub struct GetStatsUseCase<A, C, F, P>
where
    A: AccountRepository,
    C: ContentRepository,
    F: FavoriteRepository,
    P: ProgressRepository,
{
    pub accounts: A,
    pub contents: C,
    pub favorites: F,
    pub progress: P,
}

impl<A, C, F, P> GetStatsUseCase<A, C, F, P>
where
    A: AccountRepository,
    C: ContentRepository,
    F: FavoriteRepository,
    P: ProgressRepository,
{
    pub async fn execute(&self) -> Result<CatalogStats, CatalogServiceError> {
        let (accounts, admins, contents, favorites, progress_records) = tokio::try_join!(
            self.accounts.count(),
            self.accounts.count_by_role(AccountRole::Admin),
            self.contents.count(),
            self.favorites.count(),
            self.progress.count(),
        )?;
        Ok(CatalogStats {
            accounts,
            admins,
            contents,
            favorites,
            progress_records,
        })
    }
}
