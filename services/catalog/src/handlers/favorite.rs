use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use streamflix_domain::id::ContentId;

use crate::error::CatalogServiceError;
use crate::handlers::content::{ContentResponse, parse_content_id};
use crate::handlers::extract::CurrentAccount;
use crate::state::AppState;
use crate::usecase::favorite::{
    AddFavoriteUseCase, FavoriteEntry, ListFavoritesUseCase, RemoveFavoriteUseCase,
};

#[derive(Serialize)]
pub struct FavoriteResponse {
    pub favorite_id: String,
    pub content: ContentResponse,
    #[serde(serialize_with = "streamflix_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FavoriteEntry> for FavoriteResponse {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            favorite_id: entry.favorite_id.to_string(),
            content: entry.content.into(),
            created_at: entry.created_at,
        }
    }
}

// ── GET /favorites ───────────────────────────────────────────────────────────

pub async fn list_favorites(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, CatalogServiceError> {
    let usecase = ListFavoritesUseCase {
        favorites: state.favorite_repo(),
        contents: state.content_repo(),
    };
    let entries = usecase.execute(account.id).await?;
    Ok(Json(entries.into_iter().map(FavoriteResponse::from).collect()))
}

// ── POST /favorites/{content_id} ─────────────────────────────────────────────

pub async fn add_favorite(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = AddFavoriteUseCase {
        favorites: state.favorite_repo(),
        contents: state.content_repo(),
    };
    usecase
        .execute(account.id, parse_content_id(&content_id)?)
        .await?;
    Ok(StatusCode::CREATED)
}

// ── DELETE /favorites/{content_id} ───────────────────────────────────────────

pub async fn remove_favorite(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = RemoveFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    // A malformed id can never have been favorited.
    let content_id = content_id
        .parse::<ContentId>()
        .map_err(|_| CatalogServiceError::FavoriteNotFound)?;
    usecase.execute(account.id, content_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
