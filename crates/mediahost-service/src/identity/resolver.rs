//! Works out which tenant a request belongs to.
//!
//! Resolution order:
//! 1. a verified bearer token;
//! 2. the first segment of the request path, matched against tenant logins
//!    and folder names.
//!
//! The path fallback trusts the URL and can be spoofed; it only ever
//! selects which host tree is searched first. Paths arrive already
//! percent-decoded by the router and are not decoded again.

use std::sync::Arc;

use tracing::{debug, warn};

use mediahost_auth::JwtDecoder;
use mediahost_core::error::AppError;
use mediahost_core::result::AppResult;
use mediahost_database::MetadataStore;
use mediahost_entity::tenant::TenantIdentity;

/// Resolves tenants from credentials and request paths.
#[derive(Debug, Clone)]
pub struct TenantIdentityResolver {
    decoder: Arc<JwtDecoder>,
    store: Arc<dyn MetadataStore>,
}

impl TenantIdentityResolver {
    /// Creates a new resolver.
    pub fn new(decoder: Arc<JwtDecoder>, store: Arc<dyn MetadataStore>) -> Self {
        Self { decoder, store }
    }

    /// Verify a bearer token and return the tenant it identifies.
    pub fn authenticate(&self, token: &str) -> AppResult<TenantIdentity> {
        let claims = self.decoder.decode(token)?;
        claims
            .identity()
            .ok_or_else(|| AppError::authentication("Token does not identify a tenant"))
    }

    /// Best-effort resolution for content requests. Never fails.
    pub async fn resolve(&self, bearer: Option<&str>, path: &str) -> Option<TenantIdentity> {
        if let Some(token) = bearer {
            match self.authenticate(token) {
                Ok(identity) => return Some(identity),
                Err(e) => warn!(error = %e, "Ignoring invalid bearer token on content request"),
            }
        }

        let segment = first_segment(path)?;
        match self.store.find_tenant_by_path_segment(&segment).await {
            Ok(found) => {
                debug!(segment = %segment, found = found.is_some(), "Resolved tenant from path");
                found
            }
            Err(e) => {
                warn!(segment = %segment, error = %e, "Tenant lookup by path failed");
                None
            }
        }
    }
}

/// First non-empty segment of a decoded request path.
fn first_segment(path: &str) -> Option<String> {
    path.split('/')
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mediahost_auth::JwtEncoder;
    use mediahost_core::config::AuthConfig;
    use mediahost_database::InMemoryMetadataStore;
    use mediahost_entity::folder::FolderRecord;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "identity-test".into(),
            ..AuthConfig::default()
        }
    }

    async fn store_with_bob() -> Arc<InMemoryMetadataStore> {
        let store = Arc::new(InMemoryMetadataStore::new());
        store
            .put_folder(FolderRecord {
                id: 11,
                owner_id: 9,
                server_id: None,
                login: "bob".into(),
                email: Some("bob@example.com".into()),
                name: "bob show".into(),
                ftp_dir: Some("/bob/bob show".into()),
                status: 1,
                created_at: Utc::now(),
            })
            .await;
        store
    }

    fn resolver(store: Arc<InMemoryMetadataStore>) -> TenantIdentityResolver {
        TenantIdentityResolver::new(Arc::new(JwtDecoder::new(&auth_config())), store)
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/alice/a.mp4").as_deref(), Some("alice"));
        assert_eq!(first_segment("//alice/a.mp4").as_deref(), Some("alice"));
        assert_eq!(first_segment("/bob show/a.mp4").as_deref(), Some("bob show"));
        assert_eq!(first_segment("/bob%20show/a.mp4").as_deref(), Some("bob%20show"));
        assert_eq!(first_segment("/"), None);
    }

    #[tokio::test]
    async fn test_token_wins_over_path() {
        let store = store_with_bob().await;
        let token = JwtEncoder::new(&auth_config())
            .issue(7, None, Some("alice@example.com"))
            .unwrap();

        let identity = resolver(store)
            .resolve(Some(&token), "/bob/a.mp4")
            .await
            .unwrap();
        assert_eq!(identity.tenant_id, 7);
        assert_eq!(identity.login, "alice");
    }

    #[tokio::test]
    async fn test_invalid_token_falls_back_to_path() {
        let store = store_with_bob().await;
        let identity = resolver(store)
            .resolve(Some("garbage"), "/bob/a.mp4")
            .await
            .unwrap();
        assert_eq!(identity.tenant_id, 9);
        assert_eq!(identity.login, "bob");
    }

    #[tokio::test]
    async fn test_path_matches_folder_name() {
        let store = store_with_bob().await;
        let identity = resolver(store)
            .resolve(None, "/bob show/a.mp4")
            .await
            .unwrap();
        assert_eq!(identity.login, "bob");
    }

    #[tokio::test]
    async fn test_path_segment_is_not_decoded_twice() {
        let store = store_with_bob().await;
        assert!(resolver(store).resolve(None, "/bob%20show/a.mp4").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_or_failing_lookup_is_none() {
        let store = store_with_bob().await;
        let resolver = resolver(Arc::clone(&store));
        assert!(resolver.resolve(None, "/carol/a.mp4").await.is_none());

        store.set_offline(true);
        assert!(resolver.resolve(None, "/bob/a.mp4").await.is_none());
    }

    #[test]
    fn test_authenticate_requires_login() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let token = JwtEncoder::new(&auth_config()).issue(7, None, None).unwrap();
        let err = resolver(store).authenticate(&token).unwrap_err();
        assert_eq!(err.kind, mediahost_core::error::ErrorKind::Authentication);
    }
}
