use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use streamflix_domain::content::{ContentKind, VideoSource};
use streamflix_domain::id::ContentId;

use crate::domain::types::{Content, ContentFilter};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::content::{GetContentUseCase, ListCategoriesUseCase, ListContentsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ContentResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub video_url: String,
    pub video_source: VideoSource,
    pub cover_image: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub duration: Option<i32>,
    pub year: Option<i32>,
    #[serde(serialize_with = "streamflix_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "streamflix_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.to_string(),
            title: content.title,
            description: content.description,
            category: content.category,
            video_url: content.video_url,
            video_source: content.video_source,
            cover_image: content.cover_image,
            kind: content.kind,
            duration: content.duration,
            year: content.year,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

/// Content ids that do not parse cannot name stored content.
pub(crate) fn parse_content_id(raw: &str) -> Result<ContentId, CatalogServiceError> {
    raw.parse().map_err(|_| CatalogServiceError::ContentNotFound)
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ContentListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

// ── GET /contents ────────────────────────────────────────────────────────────

pub async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ContentListQuery>,
) -> Result<Json<Vec<ContentResponse>>, CatalogServiceError> {
    let usecase = ListContentsUseCase {
        contents: state.content_repo(),
    };
    let contents = usecase
        .execute(ContentFilter {
            category: query.category,
            search: query.search,
        })
        .await?;
    Ok(Json(contents.into_iter().map(ContentResponse::from).collect()))
}

// ── GET /contents/{id} ───────────────────────────────────────────────────────

pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentResponse>, CatalogServiceError> {
    let usecase = GetContentUseCase {
        contents: state.content_repo(),
    };
    let content = usecase.execute(parse_content_id(&id)?).await?;
    Ok(Json(content.into()))
}

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, CatalogServiceError> {
    let usecase = ListCategoriesUseCase {
        contents: state.content_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
