//! Request extractors that authenticate the caller.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use streamflix_auth_types::bearer::bearer_token;
use streamflix_auth_types::token::AuthError;
use streamflix_domain::account::AccountRole;

use crate::domain::types::Account;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::auth::{AuthenticateUseCase, require_role};

async fn authenticate(
    state: AppState,
    token: Result<String, AuthError>,
) -> Result<Account, CatalogServiceError> {
    let token = token?;
    let usecase = AuthenticateUseCase {
        accounts: state.account_repo(),
        keys: state.token_keys.clone(),
    };
    usecase.execute(&token).await
}

/// The account named by a valid `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl<S> FromRequestParts<S> for CurrentAccount
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CatalogServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        let state = AppState::from_ref(state);
        async move { authenticate(state, token).await.map(Self) }
    }
}

/// A [`CurrentAccount`] that also holds the admin role.
#[derive(Debug, Clone)]
pub struct AdminAccount(pub Account);

impl<S> FromRequestParts<S> for AdminAccount
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CatalogServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        let state = AppState::from_ref(state);
        async move {
            let account = authenticate(state, token).await?;
            require_role(&account, AccountRole::Admin)?;
            Ok(Self(account))
        }
    }
}
