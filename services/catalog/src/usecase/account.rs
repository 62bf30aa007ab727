use std::time::Duration;

use anyhow::Context as _;
use chrono::Utc;

use streamflix_auth_types::password::{hash_password, verify_password};
use streamflix_auth_types::token::TokenKeys;
use streamflix_domain::account::AccountRole;
use streamflix_domain::id::AccountId;

use crate::domain::repository::{AccountRepository, SettingsRepository};
use crate::domain::types::{Account, normalize_login};
use crate::error::CatalogServiceError;

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_blocking(password: String) -> Result<String, CatalogServiceError> {
    let digest = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(digest)
}

async fn verify_blocking(password: String, digest: String) -> Result<bool, CatalogServiceError> {
    let matched = tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .context("join password verification task")?;
    Ok(matched)
}

pub struct CredentialsInput {
    pub login: String,
    pub password: String,
}

/// A signed access token and the account it identifies.
#[derive(Debug)]
pub struct SessionOutput {
    pub account: Account,
    pub access_token: String,
    pub expires_at: u64,
}

fn open_session(
    keys: &TokenKeys,
    ttl: Duration,
    account: Account,
) -> Result<SessionOutput, CatalogServiceError> {
    let issued = keys
        .issue(&account.login, ttl)
        .context("issue access token")?;
    Ok(SessionOutput {
        account,
        access_token: issued.token,
        expires_at: issued.expires_at,
    })
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<A: AccountRepository> {
    pub accounts: A,
    pub keys: TokenKeys,
    pub ttl: Duration,
}

impl<A: AccountRepository> LoginUseCase<A> {
    /// Unknown login and wrong password are reported identically.
    pub async fn execute(
        &self,
        input: CredentialsInput,
    ) -> Result<SessionOutput, CatalogServiceError> {
        let login = normalize_login(&input.login)
            .map_err(|_| CatalogServiceError::InvalidCredentials)?;
        let account = self
            .accounts
            .find_by_login(&login)
            .await?
            .ok_or(CatalogServiceError::InvalidCredentials)?;

        if !verify_blocking(input.password, account.password_hash.clone()).await? {
            return Err(CatalogServiceError::InvalidCredentials);
        }

        open_session(&self.keys, self.ttl, account)
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<A: AccountRepository, S: SettingsRepository> {
    pub accounts: A,
    pub settings: S,
    pub keys: TokenKeys,
    pub ttl: Duration,
}

impl<A: AccountRepository, S: SettingsRepository> RegisterUseCase<A, S> {
    pub async fn execute(
        &self,
        input: CredentialsInput,
    ) -> Result<SessionOutput, CatalogServiceError> {
        if !self.settings.registration_enabled().await? {
            return Err(CatalogServiceError::RegistrationDisabled);
        }

        let login = normalize_login(&input.login)?;
        if input.password.is_empty() {
            return Err(CatalogServiceError::InvalidPassword);
        }
        if self.accounts.find_by_login(&login).await?.is_some() {
            return Err(CatalogServiceError::EmailTaken);
        }

        let account = Account {
            id: AccountId::generate(),
            login,
            password_hash: hash_blocking(input.password).await?,
            role: AccountRole::User,
            created_at: Utc::now(),
        };
        self.accounts.insert(&account).await?;
        tracing::info!(account_id = %account.id, "account registered");

        open_session(&self.keys, self.ttl, account)
    }
}

// ── BootstrapAdmin ───────────────────────────────────────────────────────────

/// Ensure a configured admin account exists. Existing accounts are left as
/// they are, whatever their role.
pub struct BootstrapAdminUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> BootstrapAdminUseCase<A> {
    /// Returns `true` if the admin account was created.
    pub async fn execute(&self, input: CredentialsInput) -> Result<bool, CatalogServiceError> {
        let login = normalize_login(&input.login)?;
        if input.password.is_empty() {
            return Err(CatalogServiceError::InvalidPassword);
        }
        if self.accounts.find_by_login(&login).await?.is_some() {
            tracing::info!(login = %login, "admin account already present");
            return Ok(false);
        }

        let account = Account {
            id: AccountId::generate(),
            login,
            password_hash: hash_blocking(input.password).await?,
            role: AccountRole::Admin,
            created_at: Utc::now(),
        };
        match self.accounts.insert(&account).await {
            Ok(()) => {
                tracing::info!(account_id = %account.id, login = %account.login, "admin account created");
                Ok(true)
            }
            // Another replica bootstrapped first.
            Err(CatalogServiceError::EmailTaken) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
