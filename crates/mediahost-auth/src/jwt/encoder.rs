//! JWT issuance for tests and local tooling.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use mediahost_core::config::AuthConfig;
use mediahost_core::error::AppError;

use super::claims::Claims;

/// Upper bound on token lifetime (ten years).
const MAX_TTL_MINUTES: u64 = 60 * 24 * 365 * 10;

/// Signs tenant tokens with the shared HS256 secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes.min(MAX_TTL_MINUTES) as i64,
        }
    }

    /// Issue a token for a tenant, valid for the configured TTL.
    pub fn issue(
        &self,
        tenant_id: i64,
        login: Option<&str>,
        email: Option<&str>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);
        self.encode(&Claims {
            sub: tenant_id,
            login: login.map(str::to_string),
            email: email.map(str::to_string),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    /// Sign arbitrary claims.
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
