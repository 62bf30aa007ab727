use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use streamflix_domain::id::{AccountId, ContentId};

use crate::domain::repository::{ContentRepository, FavoriteRepository};
use crate::domain::types::{Content, Favorite};
use crate::error::CatalogServiceError;

/// A favorite joined with the content it points at.
#[derive(Debug, Clone)]
pub struct FavoriteEntry {
    pub favorite_id: Uuid,
    pub content: Content,
    pub created_at: DateTime<Utc>,
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<F: FavoriteRepository, C: ContentRepository> {
    pub favorites: F,
    pub contents: C,
}

impl<F: FavoriteRepository, C: ContentRepository> ListFavoritesUseCase<F, C> {
    /// Newest first. Favorites of deleted content are skipped.
    pub async fn execute(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<FavoriteEntry>, CatalogServiceError> {
        let favorites = self.favorites.list_by_account(account_id).await?;
        if favorites.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<ContentId> = favorites.iter().map(|f| f.content_id).collect();
        let mut contents: HashMap<ContentId, Content> = self
            .contents
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(favorites
            .into_iter()
            .filter_map(|favorite| {
                let content = contents.remove(&favorite.content_id)?;
                Some(FavoriteEntry {
                    favorite_id: favorite.id,
                    content,
                    created_at: favorite.created_at,
                })
            })
            .collect())
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<F: FavoriteRepository, C: ContentRepository> {
    pub favorites: F,
    pub contents: C,
}

impl<F: FavoriteRepository, C: ContentRepository> AddFavoriteUseCase<F, C> {
    pub async fn execute(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<(), CatalogServiceError> {
        if !self.contents.exists(content_id).await? {
            return Err(CatalogServiceError::ContentNotFound);
        }
        let favorite = Favorite {
            id: Uuid::now_v7(),
            account_id,
            content_id,
            created_at: Utc::now(),
        };
        if !self.favorites.insert_if_absent(&favorite).await? {
            return Err(CatalogServiceError::FavoriteAlreadyExists);
        }
        Ok(())
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    pub async fn execute(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<(), CatalogServiceError> {
        if !self.favorites.delete(account_id, content_id).await? {
            return Err(CatalogServiceError::FavoriteNotFound);
        }
        Ok(())
    }
}
