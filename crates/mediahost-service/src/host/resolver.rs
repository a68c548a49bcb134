//! Resolves which media server hosts a tenant and where its files live.

use std::sync::Arc;

use tracing::warn;

use mediahost_core::config::StorageConfig;
use mediahost_database::MetadataStore;
use mediahost_entity::host::HostAssignment;

/// Maps tenants to their assigned media server and content root.
#[derive(Debug, Clone)]
pub struct HostResolver {
    store: Arc<dyn MetadataStore>,
    content_base: String,
}

impl HostResolver {
    /// Creates a new host resolver.
    pub fn new(store: Arc<dyn MetadataStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            content_base: config.content_base.trim_end_matches('/').to_string(),
        }
    }

    /// The media server assigned to `tenant_id`.
    ///
    /// `None` means the tenant runs in metadata-only mode: there is no
    /// assignment, the id is not a real tenant id, or the lookup failed.
    pub async fn resolve_host(&self, tenant_id: i64) -> Option<HostAssignment> {
        if tenant_id <= 0 {
            return None;
        }
        match self.store.find_host_assignment(tenant_id).await {
            Ok(assignment) => assignment,
            Err(e) => {
                warn!(tenant_id, error = %e, "Host lookup failed; continuing without a host");
                None
            }
        }
    }

    /// Host-local directory holding a tenant's content.
    pub fn content_root(&self, login: &str) -> String {
        format!("{}/{}", self.content_base, login)
    }
}
