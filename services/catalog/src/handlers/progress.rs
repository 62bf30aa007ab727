use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use streamflix_domain::id::ContentId;

use crate::domain::types::ProgressView;
use crate::error::CatalogServiceError;
use crate::handlers::content::parse_content_id;
use crate::handlers::extract::CurrentAccount;
use crate::state::AppState;
use crate::usecase::progress::{GetProgressUseCase, UpsertProgressInput, UpsertProgressUseCase};

#[derive(Serialize)]
pub struct ProgressResponse {
    pub watched_seconds: u32,
    pub total_seconds: u32,
    #[serde(
        serialize_with = "streamflix_core::serde::to_rfc3339_ms_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_watched: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ProgressView> for ProgressResponse {
    fn from(view: ProgressView) -> Self {
        Self {
            watched_seconds: view.watched_seconds,
            total_seconds: view.total_seconds,
            last_watched: view.last_watched,
        }
    }
}

/// Body of `POST /progress/{item_id}`.
#[derive(Deserialize)]
pub struct WatchProgressUpdate {
    pub watched_seconds: u32,
    pub total_seconds: u32,
}

// ── GET /progress/{item_id} ──────────────────────────────────────────────────

pub async fn get_progress(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ProgressResponse>, CatalogServiceError> {
    // An id that is not a UUID has no stored progress.
    let Ok(content_id) = item_id.parse::<ContentId>() else {
        return Ok(Json(ProgressView::default().into()));
    };
    let usecase = GetProgressUseCase {
        progress: state.progress_repo(),
    };
    let view = usecase.execute(account.id, content_id).await?;
    Ok(Json(view.into()))
}

// ── POST /progress/{item_id} ─────────────────────────────────────────────────

pub async fn upsert_progress(
    CurrentAccount(account): CurrentAccount,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<WatchProgressUpdate>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = UpsertProgressUseCase {
        progress: state.progress_repo(),
        contents: state.content_repo(),
    };
    usecase
        .execute(
            account.id,
            parse_content_id(&item_id)?,
            UpsertProgressInput {
                watched_seconds: body.watched_seconds,
                total_seconds: body.total_seconds,
            },
        )
        .await?;
    Ok(StatusCode::OK)
}
