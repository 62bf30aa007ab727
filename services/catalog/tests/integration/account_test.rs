use std::time::Duration;

use streamflix_auth_types::token::AuthError;
use streamflix_catalog::error::CatalogServiceError;
use streamflix_catalog::usecase::account::{CredentialsInput, LoginUseCase, RegisterUseCase};
use streamflix_catalog::usecase::auth::{AuthenticateUseCase, require_role};
use streamflix_catalog::usecase::settings::{UpdateSettingsInput, UpdateSettingsUseCase};
use streamflix_domain::account::AccountRole;
use streamflix_testing::auth::{MockAuth, test_keys};

use crate::helpers::{MockAccountRepo, MockSettingsRepo, test_account};

const TTL: Duration = Duration::from_secs(1800);

fn credentials(login: &str, password: &str) -> CredentialsInput {
    CredentialsInput {
        login: login.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_authenticate_with_token_from_registration() {
    let accounts = MockAccountRepo::default();
    let register = RegisterUseCase {
        accounts: accounts.clone(),
        settings: MockSettingsRepo::default(),
        keys: test_keys(),
        ttl: TTL,
    };
    let session = register
        .execute(credentials("viewer@example.com", "popcorn"))
        .await
        .unwrap();

    let authenticate = AuthenticateUseCase {
        accounts: accounts.clone(),
        keys: test_keys(),
    };
    let account = authenticate.execute(&session.access_token).await.unwrap();
    assert_eq!(account.id, session.account.id);
    assert_eq!(account.role, AccountRole::User);
}

#[tokio::test]
async fn should_login_after_registration() {
    let accounts = MockAccountRepo::default();
    RegisterUseCase {
        accounts: accounts.clone(),
        settings: MockSettingsRepo::default(),
        keys: test_keys(),
        ttl: TTL,
    }
    .execute(credentials("viewer@example.com", "popcorn"))
    .await
    .unwrap();

    let session = LoginUseCase {
        accounts,
        keys: test_keys(),
        ttl: TTL,
    }
    .execute(credentials("viewer@example.com", "popcorn"))
    .await
    .unwrap();
    assert_eq!(
        test_keys().verify(&session.access_token).unwrap(),
        "viewer@example.com"
    );
}

#[tokio::test]
async fn should_follow_registration_policy_toggle() {
    let settings = MockSettingsRepo::with_registration(false);
    let register = RegisterUseCase {
        accounts: MockAccountRepo::default(),
        settings: settings.clone(),
        keys: test_keys(),
        ttl: TTL,
    };

    let result = register
        .execute(credentials("late@example.com", "pw"))
        .await;
    assert!(matches!(
        result,
        Err(CatalogServiceError::RegistrationDisabled)
    ));

    UpdateSettingsUseCase {
        settings: settings.clone(),
    }
    .execute(UpdateSettingsInput {
        registration_enabled: Some(true),
    })
    .await
    .unwrap();

    assert!(
        register
            .execute(credentials("late@example.com", "pw"))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn should_reject_expired_token() {
    let alice = test_account("alice@example.com", AccountRole::User);
    let authenticate = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![alice]),
        keys: test_keys(),
    };
    let result = authenticate
        .execute(&MockAuth::new("alice@example.com").expired_token())
        .await;
    assert!(
        matches!(
            result,
            Err(CatalogServiceError::Unauthenticated(AuthError::Expired))
        ),
        "expected Expired, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_user_not_found_once_account_is_gone() {
    let accounts = MockAccountRepo::new(vec![test_account(
        "leaving@example.com",
        AccountRole::User,
    )]);
    let token = MockAuth::new("leaving@example.com").token();
    accounts.accounts.lock().unwrap().clear();

    let result = AuthenticateUseCase {
        accounts,
        keys: test_keys(),
    }
    .execute(&token)
    .await;
    assert!(matches!(result, Err(CatalogServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_gate_admin_role_on_every_check() {
    let user = test_account("user@example.com", AccountRole::User);
    let admin = test_account("admin@example.com", AccountRole::Admin);
    for _ in 0..2 {
        assert!(matches!(
            require_role(&user, AccountRole::Admin),
            Err(CatalogServiceError::Forbidden)
        ));
        assert!(require_role(&admin, AccountRole::Admin).is_ok());
    }
}
