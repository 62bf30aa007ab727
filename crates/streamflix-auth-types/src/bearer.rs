//! `Authorization: Bearer <token>` extraction and 401 rendering.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::request::Parts;
use http::{HeaderMap, HeaderValue, StatusCode, header::WWW_AUTHENTICATE};

use crate::token::AuthError;

/// Read the bearer credential from request headers.
///
/// Missing header, a non-`Bearer` scheme, or an empty credential all yield
/// [`AuthError::MissingToken`].
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_owned())
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Raw bearer credential, not yet verified.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; reading the
    // header synchronously keeps the returned future free of borrows.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(&parts.headers);
        async move { token.map(Self) }
    }
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        "UNAUTHENTICATED"
    }
}

/// Every token failure renders identically so clients cannot probe which
/// check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self, "request rejected as unauthenticated");
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": "invalid authentication credentials",
        });
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
            axum::Json(body),
        )
            .into_response()
    }
}
