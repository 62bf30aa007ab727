use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::CatalogServiceError;
use crate::handlers::content::ContentResponse;
use crate::handlers::extract::CurrentAccount;
use crate::state::AppState;
use crate::usecase::continue_watching::{ContinueWatchingEntry, ListContinueWatchingUseCase};

#[derive(Serialize)]
pub struct ContinueWatchingResponse {
    pub content: ContentResponse,
    pub watched_seconds: u32,
    pub total_seconds: u32,
    #[serde(serialize_with = "streamflix_core::serde::to_rfc3339_ms")]
    pub last_watched: chrono::DateTime<chrono::Utc>,
}

impl From<ContinueWatchingEntry> for ContinueWatchingResponse {
    fn from(entry: ContinueWatchingEntry) -> Self {
        Self {
            content: entry.content.into(),
            watched_seconds: entry.progress.watched_seconds,
            total_seconds: entry.progress.total_seconds,
            last_watched: entry.progress.last_watched,
        }
    }
}

// ── GET /continue-watching ───────────────────────────────────────────────────

pub async fn list_continue_watching(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContinueWatchingResponse>>, CatalogServiceError> {
    let usecase = ListContinueWatchingUseCase {
        progress: state.progress_repo(),
        contents: state.content_repo(),
    };
    let entries = usecase.execute(account.id).await?;
    Ok(Json(
        entries
            .into_iter()
            .map(ContinueWatchingResponse::from)
            .collect(),
    ))
}
