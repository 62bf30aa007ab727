//! Bearer-token helpers for integration tests.
//!
//! Services authenticate every request by verifying an HS256 bearer token.
//! `MockAuth` signs tokens with a fixed test secret so tests can build the
//! service's `TokenKeys` from the same secret and attach a valid header.

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, header::AUTHORIZATION};
use streamflix_auth_types::token::{DEFAULT_ACCESS_TOKEN_TTL, TokenKeys, now_secs};

/// Secret shared by `MockAuth` and the service state under test.
pub const TEST_JWT_SECRET: &str = "streamflix-test-secret";

/// Keys derived from [`TEST_JWT_SECRET`].
pub fn test_keys() -> TokenKeys {
    TokenKeys::new(TEST_JWT_SECRET)
}

/// Signs bearer tokens for a fixed login identifier.
pub struct MockAuth {
    pub login: String,
}

impl MockAuth {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    /// A token valid for the default access-token lifetime.
    pub fn token(&self) -> String {
        test_keys()
            .issue(&self.login, DEFAULT_ACCESS_TOKEN_TTL)
            .unwrap()
            .token
    }

    /// A token whose expiry already lies in the past.
    pub fn expired_token(&self) -> String {
        let issued_at = now_secs() - 3_600;
        test_keys()
            .issue_at(&self.login, Duration::from_secs(60), issued_at)
            .unwrap()
            .token
    }

    /// `Authorization` header pair, ready for `axum_test::TestRequest::add_header`.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        bearer_header(&self.token())
    }

    pub fn headers(&self) -> HeaderMap {
        let (name, value) = self.header();
        let mut map = HeaderMap::new();
        map.insert(name, value);
        map
    }
}

/// `Authorization: Bearer <token>` for an arbitrary token string.
pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}
