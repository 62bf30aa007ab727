//! HS256 access-token issuance and verification.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Access-token lifetime used when the service config does not override it (30 minutes).
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Reasons a presented token is rejected.
///
/// Every variant maps to 401 at the HTTP boundary; the distinction only
/// shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("malformed token")]
    Malformed,
    #[error("invalid signature")]
    SignatureInvalid,
    #[error("token expired")]
    Expired,
    #[error("token has no subject")]
    MissingSubject,
}

/// Signing failed inside jsonwebtoken.
#[derive(Debug, thiserror::Error)]
#[error("failed to sign token")]
pub struct TokenIssueError(#[from] jsonwebtoken::errors::Error);

/// JWT claims payload.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sub` | account login identifier |
/// | `iat` | issuance, seconds since UNIX epoch |
/// | `exp` | expiry, seconds since UNIX epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default)]
    pub iat: u64,
    pub exp: u64,
}

/// A freshly signed token and its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: u64,
}

/// HMAC keys derived from the process-wide signing secret.
///
/// Rotating the secret invalidates every outstanding token; there is no
/// server-side session table.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, TokenIssueError> {
        self.issue_at(subject, ttl, now_secs())
    }

    /// Sign a token as if issued at `issued_at` (seconds since UNIX epoch).
    ///
    /// Sub-second and zero TTLs are rounded up to one second so `exp` is
    /// always strictly after `iat`. Oversized TTLs saturate at `u64::MAX`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        issued_at: u64,
    ) -> Result<IssuedToken, TokenIssueError> {
        let exp = issued_at.saturating_add(ttl.as_secs().max(1));
        let claims = TokenClaims {
            sub: Some(subject.to_owned()),
            iat: issued_at,
            exp,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }

    /// Verify a token against the current clock, returning its subject.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.verify_at(token, now_secs())
    }

    /// Verify a token against `now` (seconds since UNIX epoch).
    ///
    /// Order: segment structure, signature over the raw `header.payload`
    /// bytes, claims decoding, expiry (no leeway), subject presence. The
    /// signature is checked before anything is decoded, so tampering with any
    /// segment reports `SignatureInvalid` rather than a parse failure.
    pub fn verify_at(&self, token: &str, now: u64) -> Result<String, AuthError> {
        let (message, signature) = split_compact(token)?;

        let signature_ok = jsonwebtoken::crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding,
            Algorithm::HS256,
        )
        .unwrap_or(false);
        if !signature_ok {
            return Err(AuthError::SignatureInvalid);
        }

        let claims = self.decode_claims(token)?;
        if claims.exp <= now {
            return Err(AuthError::Expired);
        }
        match claims.sub {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => Err(AuthError::MissingSubject),
        }
    }

    fn decode_claims(&self, token: &str) -> Result<TokenClaims, AuthError> {
        // Expiry is compared against the caller's clock in `verify_at`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token claims rejected");
                AuthError::Malformed
            })
    }
}

/// Split a compact JWS into (`header.payload`, `signature`).
fn split_compact(token: &str) -> Result<(&str, &str), AuthError> {
    let (message, signature) = token.rsplit_once('.').ok_or(AuthError::Malformed)?;
    let (header, payload) = message.split_once('.').ok_or(AuthError::Malformed)?;
    if header.is_empty() || payload.is_empty() || signature.is_empty() || payload.contains('.') {
        return Err(AuthError::Malformed);
    }
    Ok((message, signature))
}
