use std::time::Duration;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use streamflix_auth_types::token::TokenKeys;

use crate::infra::db::{
    DbAccountRepository, DbContentRepository, DbFavoriteRepository, DbProgressRepository,
    DbSettingsRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_keys: TokenKeys,
    pub access_token_ttl: Duration,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn content_repo(&self) -> DbContentRepository {
        DbContentRepository {
            db: self.db.clone(),
        }
    }

    pub fn progress_repo(&self) -> DbProgressRepository {
        DbProgressRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn settings_repo(&self) -> DbSettingsRepository {
        DbSettingsRepository {
            db: self.db.clone(),
        }
    }
}
