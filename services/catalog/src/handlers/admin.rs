use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use streamflix_domain::content::{ContentKind, VideoSource};

use crate::domain::types::{CatalogStats, ContentFilter, ContentPatch, NewContent, Settings};
use crate::error::CatalogServiceError;
use crate::handlers::content::{ContentResponse, parse_content_id};
use crate::handlers::extract::AdminAccount;
use crate::state::AppState;
use crate::usecase::content::{
    CreateContentUseCase, DeleteContentUseCase, ListContentsUseCase, UpdateContentUseCase,
};
use crate::usecase::settings::{GetSettingsUseCase, UpdateSettingsInput, UpdateSettingsUseCase};
use crate::usecase::stats::GetStatsUseCase;

// ── GET /admin/contents ──────────────────────────────────────────────────────

pub async fn list_all_contents(
    _admin: AdminAccount,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentResponse>>, CatalogServiceError> {
    let usecase = ListContentsUseCase {
        contents: state.content_repo(),
    };
    let contents = usecase.execute(ContentFilter::default()).await?;
    Ok(Json(contents.into_iter().map(ContentResponse::from).collect()))
}

// ── POST /admin/contents ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub video_url: String,
    pub video_source: VideoSource,
    #[serde(default)]
    pub cover_image: String,
    #[serde(rename = "type", default)]
    pub kind: ContentKind,
    pub duration: Option<i32>,
    pub year: Option<i32>,
}

pub async fn create_content(
    AdminAccount(admin): AdminAccount,
    State(state): State<AppState>,
    Json(body): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<ContentResponse>), CatalogServiceError> {
    let usecase = CreateContentUseCase {
        contents: state.content_repo(),
    };
    let content = usecase
        .execute(NewContent {
            title: body.title,
            description: body.description,
            category: body.category,
            video_url: body.video_url,
            video_source: body.video_source,
            cover_image: body.cover_image,
            kind: body.kind,
            duration: body.duration,
            year: body.year,
        })
        .await?;
    tracing::debug!(admin_id = %admin.id, content_id = %content.id, "admin created content");
    Ok((StatusCode::CREATED, Json(content.into())))
}

// ── PATCH /admin/contents/{id} ───────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub video_source: Option<VideoSource>,
    pub cover_image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    pub duration: Option<i32>,
    pub year: Option<i32>,
}

impl From<UpdateContentRequest> for ContentPatch {
    fn from(body: UpdateContentRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            category: body.category,
            video_url: body.video_url,
            video_source: body.video_source,
            cover_image: body.cover_image,
            kind: body.kind,
            duration: body.duration,
            year: body.year,
        }
    }
}

pub async fn update_content(
    _admin: AdminAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateContentRequest>,
) -> Result<Json<ContentResponse>, CatalogServiceError> {
    let usecase = UpdateContentUseCase {
        contents: state.content_repo(),
    };
    let content = usecase
        .execute(parse_content_id(&id)?, body.into())
        .await?;
    Ok(Json(content.into()))
}

// ── DELETE /admin/contents/{id} ──────────────────────────────────────────────

pub async fn delete_content(
    _admin: AdminAccount,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = DeleteContentUseCase {
        contents: state.content_repo(),
    };
    usecase.execute(parse_content_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /admin/stats ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_contents: u64,
    pub total_favorites: u64,
    pub total_progress_records: u64,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_users: stats.accounts,
            total_admins: stats.admins,
            total_contents: stats.contents,
            total_favorites: stats.favorites,
            total_progress_records: stats.progress_records,
        }
    }
}

pub async fn get_stats(
    _admin: AdminAccount,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, CatalogServiceError> {
    let usecase = GetStatsUseCase {
        accounts: state.account_repo(),
        contents: state.content_repo(),
        favorites: state.favorite_repo(),
        progress: state.progress_repo(),
    };
    Ok(Json(usecase.execute().await?.into()))
}

// ── GET/PUT /admin/settings ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SettingsResponse {
    pub registration_enabled: bool,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            registration_enabled: settings.registration_enabled,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
    pub registration_enabled: Option<bool>,
}

pub async fn get_settings(
    _admin: AdminAccount,
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    let usecase = GetSettingsUseCase {
        settings: state.settings_repo(),
    };
    Ok(Json(usecase.execute().await?.into()))
}

pub async fn update_settings(
    _admin: AdminAccount,
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    let usecase = UpdateSettingsUseCase {
        settings: state.settings_repo(),
    };
    let settings = usecase
        .execute(UpdateSettingsInput {
            registration_enabled: body.registration_enabled,
        })
        .await?;
    Ok(Json(settings.into()))
}
