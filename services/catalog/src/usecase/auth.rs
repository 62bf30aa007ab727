use streamflix_auth_types::token::TokenKeys;
use streamflix_domain::account::AccountRole;

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::CatalogServiceError;

// ── Authenticate ─────────────────────────────────────────────────────────────

/// Resolve a bearer token to the account it was issued for.
pub struct AuthenticateUseCase<A: AccountRepository> {
    pub accounts: A,
    pub keys: TokenKeys,
}

impl<A: AccountRepository> AuthenticateUseCase<A> {
    pub async fn execute(&self, token: &str) -> Result<Account, CatalogServiceError> {
        let login = self.keys.verify(token)?;
        self.accounts
            .find_by_login(&login)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)
    }
}

// ── RequireRole ──────────────────────────────────────────────────────────────

/// Admit `account` only if it holds exactly `role`.
pub fn require_role(account: &Account, role: AccountRole) -> Result<(), CatalogServiceError> {
    if account.role == role {
        Ok(())
    } else {
        Err(CatalogServiceError::Forbidden)
    }
}
