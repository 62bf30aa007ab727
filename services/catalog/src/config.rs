use std::time::Duration;

use streamflix_auth_types::token::DEFAULT_ACCESS_TOKEN_TTL;

/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8001). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
    /// Access-token lifetime (default 30 minutes). Env var: `ACCESS_TOKEN_TTL_SECS`.
    pub access_token_ttl: Duration,
    /// Admin account created at startup when both are set.
    /// Env vars: `ADMIN_EMAIL`, `ADMIN_PASSWORD`.
    pub admin: Option<AdminBootstrap>,
}

pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            catalog_port: std::env::var("CATALOG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8001),
            access_token_ttl: std::env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_ACCESS_TOKEN_TTL),
            admin: match (
                std::env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
                std::env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
            ) {
                (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
                _ => None,
            },
        }
    }
}
