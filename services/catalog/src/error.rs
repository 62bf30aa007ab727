use axum::http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE};
use axum::response::{IntoResponse, Response};

use streamflix_auth_types::token::AuthError;

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("registration is disabled")]
    RegistrationDisabled,
    #[error("invalid authentication credentials")]
    Unauthenticated(#[from] AuthError),
    #[error("user not found")]
    UserNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("content not found")]
    ContentNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("content already in favorites")]
    FavoriteAlreadyExists,
    #[error("invalid login")]
    InvalidLogin,
    #[error("invalid password")]
    InvalidPassword,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::RegistrationDisabled => "REGISTRATION_DISABLED",
            Self::Unauthenticated(e) => e.kind(),
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::ContentNotFound => "CONTENT_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::FavoriteAlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::InvalidLogin => "INVALID_LOGIN",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated(e) => return (*e).into_response(),
            Self::UserNotFound | Self::ContentNotFound | Self::FavoriteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::EmailTaken
            | Self::FavoriteAlreadyExists
            | Self::InvalidLogin
            | Self::InvalidPassword
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden | Self::RegistrationDisabled => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if status == StatusCode::UNAUTHORIZED {
            return (
                status,
                [(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                axum::Json(body),
            )
                .into_response();
        }
        (status, axum::Json(body)).into_response()
    }
}
