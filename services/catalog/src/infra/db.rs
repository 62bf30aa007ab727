use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    sea_query::{Expr, Func, LikeExpr, OnConflict},
};

use streamflix_catalog_schema::{accounts, contents, favorites, settings, watch_progress};
use streamflix_domain::account::AccountRole;
use streamflix_domain::id::{AccountId, ContentId};

use crate::domain::repository::{
    AccountRepository, ContentRepository, FavoriteRepository, ProgressRepository,
    SettingsRepository,
};
use crate::domain::types::{Account, Content, ContentFilter, Favorite, WatchProgress};
use crate::error::CatalogServiceError;

const REGISTRATION_ENABLED_KEY: &str = "registration_enabled";

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, CatalogServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(login))
            .one(&self.db)
            .await
            .context("find account by login")?;
        model.map(account_from_model).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CatalogServiceError> {
        let model = accounts::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find account by id")?;
        model.map(account_from_model).transpose()
    }

    async fn insert(&self, account: &Account) -> Result<(), CatalogServiceError> {
        let result = accounts::ActiveModel {
            id: Set(account.id.0),
            email: Set(account.login.clone()),
            password_hash: Set(account.password_hash.clone()),
            role: Set(account.role.as_str().to_owned()),
            created_at: Set(account.created_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(CatalogServiceError::EmailTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert account").into()),
        }
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        let count = accounts::Entity::find()
            .count(&self.db)
            .await
            .context("count accounts")?;
        Ok(count)
    }

    async fn count_by_role(&self, role: AccountRole) -> Result<u64, CatalogServiceError> {
        let count = accounts::Entity::find()
            .filter(accounts::Column::Role.eq(role.as_str()))
            .count(&self.db)
            .await
            .context("count accounts by role")?;
        Ok(count)
    }
}

fn account_from_model(model: accounts::Model) -> Result<Account, CatalogServiceError> {
    Ok(Account {
        id: AccountId(model.id),
        login: model.email,
        password_hash: model.password_hash,
        role: model.role.parse().context("decode account role")?,
        created_at: model.created_at,
    })
}

// ── Content repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContentRepository {
    pub db: DatabaseConnection,
}

impl ContentRepository for DbContentRepository {
    async fn exists(&self, id: ContentId) -> Result<bool, CatalogServiceError> {
        let count = contents::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .context("check content exists")?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<Content>, CatalogServiceError> {
        let model = contents::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find content by id")?;
        model.map(content_from_model).transpose()
    }

    async fn find_by_ids(&self, ids: &[ContentId]) -> Result<Vec<Content>, CatalogServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = contents::Entity::find()
            .filter(contents::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(&self.db)
            .await
            .context("find contents by ids")?;
        models.into_iter().map(content_from_model).collect()
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<Content>, CatalogServiceError> {
        let mut query = contents::Entity::find();
        if let Some(category) = &filter.category {
            query = query.filter(contents::Column::Category.eq(category.as_str()));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    contents::Entity,
                    contents::Column::Title,
                ))))
                .like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        let models = query
            .order_by_desc(contents::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list contents")?;
        models.into_iter().map(content_from_model).collect()
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        let categories = contents::Entity::find()
            .select_only()
            .column(contents::Column::Category)
            .distinct()
            .order_by_asc(contents::Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(categories)
    }

    async fn create(&self, content: &Content) -> Result<(), CatalogServiceError> {
        content_active_model(content)
            .insert(&self.db)
            .await
            .context("create content")?;
        Ok(())
    }

    async fn update(&self, content: &Content) -> Result<bool, CatalogServiceError> {
        match content_active_model(content).update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("update content").into()),
        }
    }

    async fn delete(&self, id: ContentId) -> Result<bool, CatalogServiceError> {
        let result = contents::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete content")?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        let count = contents::Entity::find()
            .count(&self.db)
            .await
            .context("count contents")?;
        Ok(count)
    }
}

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn content_active_model(content: &Content) -> contents::ActiveModel {
    contents::ActiveModel {
        id: Set(content.id.0),
        title: Set(content.title.clone()),
        description: Set(content.description.clone()),
        category: Set(content.category.clone()),
        video_url: Set(content.video_url.clone()),
        video_source: Set(content.video_source.as_str().to_owned()),
        cover_image: Set(content.cover_image.clone()),
        kind: Set(content.kind.as_str().to_owned()),
        duration: Set(content.duration),
        year: Set(content.year),
        created_at: Set(content.created_at),
        updated_at: Set(content.updated_at),
    }
}

fn content_from_model(model: contents::Model) -> Result<Content, CatalogServiceError> {
    Ok(Content {
        id: ContentId(model.id),
        title: model.title,
        description: model.description,
        category: model.category,
        video_url: model.video_url,
        video_source: model.video_source.parse().context("decode video source")?,
        cover_image: model.cover_image,
        kind: model.kind.parse().context("decode content kind")?,
        duration: model.duration,
        year: model.year,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Progress repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProgressRepository {
    pub db: DatabaseConnection,
}

impl ProgressRepository for DbProgressRepository {
    async fn upsert(&self, progress: &WatchProgress) -> Result<(), CatalogServiceError> {
        let record = watch_progress::ActiveModel {
            account_id: Set(progress.account_id.0),
            content_id: Set(progress.content_id.0),
            watched_seconds: Set(i64::from(progress.watched_seconds)),
            total_seconds: Set(i64::from(progress.total_seconds)),
            last_watched: Set(progress.last_watched),
        };
        watch_progress::Entity::insert(record)
            .on_conflict(
                OnConflict::columns([
                    watch_progress::Column::AccountId,
                    watch_progress::Column::ContentId,
                ])
                .update_columns([
                    watch_progress::Column::WatchedSeconds,
                    watch_progress::Column::TotalSeconds,
                    watch_progress::Column::LastWatched,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert watch progress")?;
        Ok(())
    }

    async fn get(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<Option<WatchProgress>, CatalogServiceError> {
        let model = watch_progress::Entity::find_by_id((account_id.0, content_id.0))
            .one(&self.db)
            .await
            .context("get watch progress")?;
        model.map(progress_from_model).transpose()
    }

    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<WatchProgress>, CatalogServiceError> {
        let models = watch_progress::Entity::find()
            .filter(watch_progress::Column::AccountId.eq(account_id.0))
            .order_by_desc(watch_progress::Column::LastWatched)
            .all(&self.db)
            .await
            .context("list watch progress")?;
        models.into_iter().map(progress_from_model).collect()
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        let count = watch_progress::Entity::find()
            .count(&self.db)
            .await
            .context("count watch progress")?;
        Ok(count)
    }
}

fn progress_from_model(model: watch_progress::Model) -> Result<WatchProgress, CatalogServiceError> {
    Ok(WatchProgress {
        account_id: AccountId(model.account_id),
        content_id: ContentId(model.content_id),
        watched_seconds: u32::try_from(model.watched_seconds)
            .context("watched_seconds out of range")?,
        total_seconds: u32::try_from(model.total_seconds).context("total_seconds out of range")?,
        last_watched: model.last_watched,
    })
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Favorite>, CatalogServiceError> {
        let models = favorites::Entity::find()
            .filter(favorites::Column::AccountId.eq(account_id.0))
            .order_by_desc(favorites::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list favorites")?;
        Ok(models.into_iter().map(favorite_from_model).collect())
    }

    async fn insert_if_absent(&self, favorite: &Favorite) -> Result<bool, CatalogServiceError> {
        let model = favorites::ActiveModel {
            id: Set(favorite.id),
            account_id: Set(favorite.account_id.0),
            content_id: Set(favorite.content_id.0),
            created_at: Set(favorite.created_at),
        };
        let result = favorites::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([favorites::Column::AccountId, favorites::Column::ContentId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;
        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("insert favorite").into()),
        }
    }

    async fn delete(
        &self,
        account_id: AccountId,
        content_id: ContentId,
    ) -> Result<bool, CatalogServiceError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::AccountId.eq(account_id.0))
            .filter(favorites::Column::ContentId.eq(content_id.0))
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        let count = favorites::Entity::find()
            .count(&self.db)
            .await
            .context("count favorites")?;
        Ok(count)
    }
}

fn favorite_from_model(model: favorites::Model) -> Favorite {
    Favorite {
        id: model.id,
        account_id: AccountId(model.account_id),
        content_id: ContentId(model.content_id),
        created_at: model.created_at,
    }
}

// ── Settings repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSettingsRepository {
    pub db: DatabaseConnection,
}

impl SettingsRepository for DbSettingsRepository {
    async fn registration_enabled(&self) -> Result<bool, CatalogServiceError> {
        let model = settings::Entity::find_by_id(REGISTRATION_ENABLED_KEY.to_owned())
            .one(&self.db)
            .await
            .context("get registration setting")?;
        Ok(model.is_none_or(|m| m.value != "false"))
    }

    async fn set_registration_enabled(
        &self,
        enabled: bool,
        now: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        let model = settings::ActiveModel {
            key: Set(REGISTRATION_ENABLED_KEY.to_owned()),
            value: Set(enabled.to_string()),
            updated_at: Set(now),
        };
        settings::Entity::insert(model)
            .on_conflict(
                OnConflict::column(settings::Column::Key)
                    .update_columns([settings::Column::Value, settings::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("set registration setting")?;
        Ok(())
    }
}
