//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mediahost_auth::JwtDecoder;
use mediahost_core::config::AppConfig;
use mediahost_database::MetadataStore;
use mediahost_service::{ContentService, FolderService, HostResolver, TenantIdentityResolver};
use mediahost_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Built once at
/// startup; every field is an `Arc` so cloning per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Metadata store gateway.
    pub store: Arc<dyn MetadataStore>,
    /// Media host storage providers.
    pub storage: Arc<StorageManager>,
    /// Tenant resolution from tokens and paths.
    pub identity: Arc<TenantIdentityResolver>,
    /// Folder lifecycle service.
    pub folder_service: Arc<FolderService>,
    /// Content delivery service.
    pub content_service: Arc<ContentService>,
}

impl AppState {
    /// Wire every service from configuration, a store and storage providers.
    pub fn new(config: AppConfig, store: Arc<dyn MetadataStore>, storage: StorageManager) -> Self {
        let storage = Arc::new(storage);
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let hosts = Arc::new(HostResolver::new(Arc::clone(&store), &config.storage));
        let identity = Arc::new(TenantIdentityResolver::new(decoder, Arc::clone(&store)));
        let folder_service = Arc::new(FolderService::new(
            Arc::clone(&store),
            Arc::clone(&hosts),
            Arc::clone(&storage),
        ));
        let content_service = Arc::new(ContentService::new(
            Arc::clone(&identity),
            hosts,
            Arc::clone(&storage),
            &config.storage,
        ));

        Self {
            config: Arc::new(config),
            store,
            storage,
            identity,
            folder_service,
            content_service,
        }
    }
}
