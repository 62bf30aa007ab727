use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use streamflix_catalog::domain::repository::{
    AccountRepository, ContentRepository, FavoriteRepository, ProgressRepository,
    SettingsRepository,
};
use streamflix_catalog::domain::types::{
    Account, Content, ContentFilter, Favorite, WatchProgress,
};
use streamflix_catalog::error::CatalogServiceError;
use streamflix_domain::account::AccountRole;
use streamflix_domain::content::{ContentKind, VideoSource};
use streamflix_domain::id::{AccountId, ContentId};

// ── MockAccountRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, CatalogServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.login == login)
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CatalogServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), CatalogServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.login == account.login) {
            return Err(CatalogServiceError::EmailTaken);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        Ok(self.accounts.lock().unwrap().len() as u64)
    }

    async fn count_by_role(&self, role: AccountRole) -> Result<u64, CatalogServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.role == role)
            .count() as u64)
    }
}

// ── MockContentRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockContentRepo {
    pub contents: Arc<Mutex<Vec<Content>>>,
}

impl MockContentRepo {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(contents)),
        }
    }
}

impl ContentRepository for MockContentRepo {
    async fn exists(&self, id: ContentId) -> Result<bool, CatalogServiceError> {
        Ok(self.contents.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<Content>, CatalogServiceError> {
        Ok(self
            .contents
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[ContentId]) -> Result<Vec<Content>, CatalogServiceError> {
        Ok(self
            .contents
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<Content>, CatalogServiceError> {
        let search = filter.search.as_ref().map(|s| s.to_lowercase());
        Ok(self
            .contents
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filter.category.as_ref().is_none_or(|cat| &c.category == cat))
            .filter(|c| {
                search
                    .as_ref()
                    .is_none_or(|s| c.title.to_lowercase().contains(s))
            })
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        let mut categories: Vec<String> = self
            .contents
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn create(&self, content: &Content) -> Result<(), CatalogServiceError> {
        self.contents.lock().unwrap().push(content.clone());
        Ok(())
    }

    async fn update(&self, content: &Content) -> Result<bool, CatalogServiceError> {
        let mut contents = self.contents.lock().unwrap();
        match contents.iter_mut().find(|c| c.id == content.id) {
            Some(slot) => {
                *slot = content.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ContentId) -> Result<bool, CatalogServiceError> {
        let mut contents = self.contents.lock().unwrap();
        let before = contents.len();
        contents.retain(|c| c.id != id);
        Ok(contents.len() < before)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        Ok(self.contents.lock().unwrap().len() as u64)
    }
}

// ── MockProgressRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProgressRepo {
    pub records: Arc<Mutex<Vec<WatchProgress>>>,
}

impl MockProgressRepo {
    pub fn new(records: Vec<WatchProgress>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl ProgressRepository for MockProgressRepo {
    async fn upsert(&self, progress: &WatchProgress) -> Result<(), CatalogServiceError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| {
            r.account_id == progress.account_id && r.content_id == progress.content_id
        }) {
            Some(slot) => *slot = progress.clone(),
            None => records.push(progress.clone()),
        }
        Ok(())
    }

    async fn get(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<Option<WatchProgress>, CatalogServiceError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.account_id == account_id && r.content_id == content_id)
            .cloned())
    }

    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<WatchProgress>, CatalogServiceError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

// ── MockFavoriteRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockFavoriteRepo {
    pub favorites: Arc<Mutex<Vec<Favorite>>>,
}

impl FavoriteRepository for MockFavoriteRepo {
    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Favorite>, CatalogServiceError> {
        let mut favorites: Vec<Favorite> = self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.account_id == account_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(favorites)
    }

    async fn insert_if_absent(&self, favorite: &Favorite) -> Result<bool, CatalogServiceError> {
        let mut favorites = self.favorites.lock().unwrap();
        if favorites
            .iter()
            .any(|f| f.account_id == favorite.account_id && f.content_id == favorite.content_id)
        {
            return Ok(false);
        }
        favorites.push(favorite.clone());
        Ok(true)
    }

    async fn delete(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<bool, CatalogServiceError> {
        let mut favorites = self.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|f| !(f.account_id == account_id && f.content_id == content_id));
        Ok(favorites.len() < before)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        Ok(self.favorites.lock().unwrap().len() as u64)
    }
}

// ── MockSettingsRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSettingsRepo {
    /// `None` models a missing row.
    pub registration_enabled: Arc<Mutex<Option<bool>>>,
}

impl MockSettingsRepo {
    pub fn with_registration(enabled: bool) -> Self {
        Self {
            registration_enabled: Arc::new(Mutex::new(Some(enabled))),
        }
    }
}

impl SettingsRepository for MockSettingsRepo {
    async fn registration_enabled(&self) -> Result<bool, CatalogServiceError> {
        Ok(self.registration_enabled.lock().unwrap().unwrap_or(true))
    }

    async fn set_registration_enabled(
        &self,
        enabled: bool,
        _now: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        *self.registration_enabled.lock().unwrap() = Some(enabled);
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_account(login: &str, role: AccountRole) -> Account {
    Account {
        id: AccountId::generate(),
        login: login.to_owned(),
        password_hash: String::new(),
        role,
        created_at: Utc::now(),
    }
}

pub fn test_content(title: &str, category: &str) -> Content {
    let now = Utc::now();
    Content {
        id: ContentId::generate(),
        title: title.to_owned(),
        description: format!("{title} description"),
        category: category.to_owned(),
        video_url: "https://player.vimeo.com/video/76979871".to_owned(),
        video_source: VideoSource::Vimeo,
        cover_image: "https://images.example.com/cover.jpg".to_owned(),
        kind: ContentKind::Movie,
        duration: Some(5400),
        year: Some(2020),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_progress(
    account_id: AccountId,
    content_id: ContentId,
    watched_seconds: u32,
    total_seconds: u32,
    last_watched: DateTime<Utc>,
) -> WatchProgress {
    WatchProgress {
        account_id,
        content_id,
        watched_seconds,
        total_seconds,
        last_watched,
    }
}
