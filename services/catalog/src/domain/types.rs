use chrono::{DateTime, Utc};

use streamflix_domain::account::AccountRole;
use streamflix_domain::content::{ContentKind, VideoSource};
use streamflix_domain::id::{AccountId, ContentId};

use crate::error::CatalogServiceError;

/// Lower bound of the continue-watching band, in percent.
pub const CONTINUE_WATCHING_MIN_PCT: f64 = 5.0;
/// Upper bound of the continue-watching band, in percent.
pub const CONTINUE_WATCHING_MAX_PCT: f64 = 95.0;

/// Registered account. `login` is the normalized email address.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub login: String,
    pub password_hash: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }
}

/// Trim and lower-case a login identifier, rejecting anything that is not
/// `local@domain` with both parts non-empty.
pub fn normalize_login(raw: &str) -> Result<String, CatalogServiceError> {
    let login = raw.trim().to_lowercase();
    match login.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !login.contains(char::is_whitespace) =>
        {
            Ok(login)
        }
        _ => Err(CatalogServiceError::InvalidLogin),
    }
}

/// Catalog item metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub video_url: String,
    pub video_source: VideoSource,
    pub cover_image: String,
    pub kind: ContentKind,
    /// Runtime in seconds.
    pub duration: Option<i32>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a catalog item.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub description: String,
    pub category: String,
    pub video_url: String,
    pub video_source: VideoSource,
    pub cover_image: String,
    pub kind: ContentKind,
    pub duration: Option<i32>,
    pub year: Option<i32>,
}

/// Partial update of a catalog item. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub video_source: Option<VideoSource>,
    pub cover_image: Option<String>,
    pub kind: Option<ContentKind>,
    pub duration: Option<i32>,
    pub year: Option<i32>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.video_url.is_none()
            && self.video_source.is_none()
            && self.cover_image.is_none()
            && self.kind.is_none()
            && self.duration.is_none()
            && self.year.is_none()
    }
}

impl Content {
    /// Merge `patch` field by field and stamp `updated_at`.
    pub fn apply(mut self, patch: ContentPatch, now: DateTime<Utc>) -> Self {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
        if let Some(video_source) = patch.video_source {
            self.video_source = video_source;
        }
        if let Some(cover_image) = patch.cover_image {
            self.cover_image = cover_image;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if patch.duration.is_some() {
            self.duration = patch.duration;
        }
        if patch.year.is_some() {
            self.year = patch.year;
        }
        self.updated_at = now;
        self
    }
}

/// Content listing filter. Both criteria are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

/// Stored playback position of one account on one item.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchProgress {
    pub account_id: AccountId,
    pub content_id: ContentId,
    pub watched_seconds: u32,
    pub total_seconds: u32,
    pub last_watched: DateTime<Utc>,
}

impl WatchProgress {
    /// Watched share in percent, `None` when the total is unknown (zero).
    pub fn watched_pct(&self) -> Option<f64> {
        if self.total_seconds == 0 {
            return None;
        }
        Some(f64::from(self.watched_seconds) * 100.0 / f64::from(self.total_seconds))
    }

    /// Whether the item counts as started but not finished.
    pub fn in_continue_watching_band(&self) -> bool {
        self.watched_pct().is_some_and(|pct| {
            (CONTINUE_WATCHING_MIN_PCT..=CONTINUE_WATCHING_MAX_PCT).contains(&pct)
        })
    }
}

/// Progress as reported to clients: zeroes and no timestamp when never written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressView {
    pub watched_seconds: u32,
    pub total_seconds: u32,
    pub last_watched: Option<DateTime<Utc>>,
}

impl From<WatchProgress> for ProgressView {
    fn from(progress: WatchProgress) -> Self {
        Self {
            watched_seconds: progress.watched_seconds,
            total_seconds: progress.total_seconds,
            last_watched: Some(progress.last_watched),
        }
    }
}

/// Account bookmark of a catalog item.
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: uuid::Uuid,
    pub account_id: AccountId,
    pub content_id: ContentId,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub accounts: u64,
    pub admins: u64,
    pub contents: u64,
    pub favorites: u64,
    pub progress_records: u64,
}

/// Process-wide switches editable by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub registration_enabled: bool,
}
