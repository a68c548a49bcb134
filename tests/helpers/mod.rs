//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use mediahost_api::{AppState, build_app};
use mediahost_auth::JwtEncoder;
use mediahost_core::config::{AppConfig, AuthConfig, StorageConfig};
use mediahost_database::{InMemoryMetadataStore, MetadataStore};
use mediahost_entity::folder::FolderRecord;
use mediahost_storage::StorageManager;
use mediahost_storage::providers::LocalStorageProvider;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Metadata store for direct setup and inspection
    pub store: Arc<InMemoryMetadataStore>,
    /// Token issuer sharing the app's secret
    pub encoder: JwtEncoder,
    /// Root of the local storage provider
    pub root: tempfile::TempDir,
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON (`Value::Null` when it is not JSON).
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }

    /// A header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Create a new test application backed by memory and a temp directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::with_database_url("postgres://unused");
        config.auth = AuthConfig {
            jwt_secret: "integration-secret".into(),
            ..AuthConfig::default()
        };
        config.storage = StorageConfig {
            content_base: "/tenants".into(),
            fallback_root: "/fallback".into(),
            ..StorageConfig::default()
        };

        let encoder = JwtEncoder::new(&config.auth);
        let store = Arc::new(InMemoryMetadataStore::new());
        let storage = StorageManager::new(Arc::new(LocalStorageProvider::new(root.path())));
        let dyn_store: Arc<dyn MetadataStore> = store.clone();
        let state = AppState::new(config, dyn_store, storage);

        Self {
            router: build_app(state),
            store,
            encoder,
            root,
        }
    }

    /// Issue a token for a tenant identified by email only.
    pub fn token_for(&self, tenant_id: i64, email: &str) -> String {
        self.encoder
            .issue(tenant_id, None, Some(email))
            .expect("Failed to issue token")
    }

    /// Write a file below the storage root.
    pub fn write_file(&self, rel: &str, data: &[u8]) {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, data).expect("Failed to write file");
    }

    /// Whether a path below the storage root exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.root.path().join(rel).exists()
    }

    /// Storage root path.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&json).expect("Failed to encode body"))
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("Failed to build request"))
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            headers,
            bytes,
        }
    }

    /// Make an authenticated request with a bearer token.
    pub async fn authed(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: &str,
    ) -> TestResponse {
        let auth = format!("Bearer {token}");
        self.request(method, uri, body, &[("Authorization", auth.as_str())])
            .await
    }
}

/// A folder row owned by `owner_id`.
pub fn folder_row(id: i64, owner_id: i64, login: &str, name: &str) -> FolderRecord {
    FolderRecord {
        id,
        owner_id,
        server_id: Some(3),
        login: login.to_string(),
        email: Some(format!("{login}@example.com")),
        name: name.to_string(),
        ftp_dir: Some(format!("/{login}/{name}")),
        status: 1,
        created_at: Utc::now(),
    }
}
