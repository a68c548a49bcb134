//! Resolved tenant identity.

use serde::{Deserialize, Serialize};

/// A tenant resolved from a credential or a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantIdentity {
    /// Tenant identifier.
    pub tenant_id: i64,
    /// Login; names the tenant's directory on the media host.
    pub login: String,
    /// Email, when known.
    pub email: Option<String>,
}

impl TenantIdentity {
    /// Creates a new identity.
    pub fn new(tenant_id: i64, login: impl Into<String>, email: Option<String>) -> Self {
        Self {
            tenant_id,
            login: login.into(),
            email,
        }
    }
}

/// Derive a login from an email address: everything before the first `@`.
pub fn login_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_from_email() {
        assert_eq!(login_from_email("alice@example.com"), "alice");
        assert_eq!(login_from_email("bob"), "bob");
        assert_eq!(login_from_email("@example.com"), "");
    }
}
