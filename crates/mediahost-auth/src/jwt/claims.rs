//! JWT claims carried by tenant credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mediahost_entity::tenant::{TenantIdentity, login_from_email};

/// Claims payload of a tenant bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the tenant id.
    #[serde(alias = "userId")]
    pub sub: i64,
    /// Explicit login; derived from `email` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Tenant email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the tenant id from the subject claim.
    pub fn tenant_id(&self) -> i64 {
        self.sub
    }

    /// The tenant login: the `login` claim, else the email local part.
    pub fn tenant_login(&self) -> Option<String> {
        self.login
            .clone()
            .filter(|l| !l.is_empty())
            .or_else(|| {
                self.email
                    .as_deref()
                    .map(login_from_email)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
            })
    }

    /// Resolve the claims into a tenant identity.
    ///
    /// Returns `None` when no login can be derived.
    pub fn identity(&self) -> Option<TenantIdentity> {
        let login = self.tenant_login()?;
        Some(TenantIdentity::new(self.sub, login, self.email.clone()))
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
