use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::Account;
use crate::error::CatalogServiceError;
use crate::handlers::extract::CurrentAccount;
use crate::state::AppState;
use crate::usecase::account::{CredentialsInput, LoginUseCase, RegisterUseCase, SessionOutput};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub role: &'static str,
    #[serde(serialize_with = "streamflix_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.login,
            role: account.role.as_str(),
            created_at: account.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Seconds since UNIX epoch.
    pub expires_at: u64,
    pub account: AccountResponse,
}

impl From<SessionOutput> for SessionResponse {
    fn from(output: SessionOutput) -> Self {
        Self {
            token: output.access_token,
            token_type: "bearer",
            expires_at: output.expires_at,
            account: output.account.into(),
        }
    }
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(alias = "email")]
    pub login: String,
    pub password: String,
}

impl From<CredentialsRequest> for CredentialsInput {
    fn from(body: CredentialsRequest) -> Self {
        Self {
            login: body.login,
            password: body.password,
        }
    }
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, CatalogServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        keys: state.token_keys.clone(),
        ttl: state.access_token_ttl,
    };
    let output = usecase.execute(body.into()).await?;
    Ok(Json(output.into()))
}

// ── POST /auth/register ──────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, CatalogServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        settings: state.settings_repo(),
        keys: state.token_keys.clone(),
        ttl: state.access_token_ttl,
    };
    let output = usecase.execute(body.into()).await?;
    Ok(Json(output.into()))
}

// ── GET /auth/me ─────────────────────────────────────────────────────────────

pub async fn me(CurrentAccount(account): CurrentAccount) -> Json<AccountResponse> {
    Json(account.into())
}
