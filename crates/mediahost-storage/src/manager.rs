//! Storage manager: routes host paths to the provider that can see them.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use mediahost_core::config::StorageConfig;
use mediahost_core::traits::storage::StorageProvider;

use crate::providers::LocalStorageProvider;

/// Holds one provider per mounted media server plus a default provider.
///
/// Built once at startup and shared read-only afterwards. Hosts without a
/// mount entry are served by the default provider.
#[derive(Debug, Clone)]
pub struct StorageManager {
    /// Map of media server id → provider.
    hosts: HashMap<i64, Arc<dyn StorageProvider>>,
    /// Provider for unmapped hosts and the fallback content root.
    default: Arc<dyn StorageProvider>,
}

impl StorageManager {
    /// Create a manager with only a default provider.
    pub fn new(default: Arc<dyn StorageProvider>) -> Self {
        Self {
            hosts: HashMap::new(),
            default,
        }
    }

    /// Build providers for the default mount and every configured host mount.
    pub fn from_config(config: &StorageConfig) -> Self {
        let mut manager = Self::new(Arc::new(LocalStorageProvider::new(&config.default_mount)));
        for mount in &config.mounts {
            info!(host_id = mount.host_id, root = %mount.root, "Registering host mount");
            manager = manager.with_host(mount.host_id, Arc::new(LocalStorageProvider::new(&mount.root)));
        }
        manager
    }

    /// Register the provider for a media server, replacing any previous one.
    pub fn with_host(mut self, host_id: i64, provider: Arc<dyn StorageProvider>) -> Self {
        self.hosts.insert(host_id, provider);
        self
    }

    /// Provider that reaches the given media server.
    pub fn for_host(&self, host_id: i64) -> Arc<dyn StorageProvider> {
        self.hosts
            .get(&host_id)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    /// The default provider.
    pub fn default_provider(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.default)
    }

    /// Check health of the default provider and every host mount.
    ///
    /// The default provider is reported under id `0`.
    pub async fn health_check_all(&self) -> HashMap<i64, bool> {
        let mut results = HashMap::new();
        results.insert(0, self.default.health_check().await.unwrap_or(false));
        for (id, provider) in &self.hosts {
            results.insert(*id, provider.health_check().await.unwrap_or(false));
        }
        results
    }
}
