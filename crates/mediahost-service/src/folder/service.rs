//! Folder create/list/delete for a tenant.

use std::sync::Arc;

use tracing::{info, warn};

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_database::MetadataStore;
use mediahost_entity::folder::{Folder, NewFolder};
use mediahost_entity::tenant::TenantIdentity;
use mediahost_storage::StorageManager;

use super::sync::PhysicalSync;
use crate::host::HostResolver;

/// Manages a tenant's folders across the metadata store and its media host.
#[derive(Debug, Clone)]
pub struct FolderService {
    store: Arc<dyn MetadataStore>,
    hosts: Arc<HostResolver>,
    storage: Arc<StorageManager>,
}

/// Result of creating a folder.
#[derive(Debug, Clone)]
pub struct CreatedFolder {
    /// The folder as presented to the tenant.
    pub folder: Folder,
    /// Outcome of creating the host directory.
    pub physical: PhysicalSync,
}

/// Result of deleting a folder.
#[derive(Debug, Clone)]
pub struct DeletedFolder {
    /// Id of the deleted folder.
    pub folder_id: i64,
    /// Rows removed by the scoped delete (0 if ownership changed meanwhile).
    pub removed_rows: u64,
    /// Outcome of removing the host directory.
    pub physical: PhysicalSync,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        store: Arc<dyn MetadataStore>,
        hosts: Arc<HostResolver>,
        storage: Arc<StorageManager>,
    ) -> Self {
        Self {
            store,
            hosts,
            storage,
        }
    }

    /// Lists the tenant's active folders.
    ///
    /// A tenant without folder rows gets a single synthesized folder named
    /// after its login.
    pub async fn list(&self, tenant: &TenantIdentity) -> AppResult<Vec<Folder>> {
        let records = self.store.list_active_folders(tenant.tenant_id).await?;
        let host = self.hosts.resolve_host(tenant.tenant_id).await;

        if records.is_empty() {
            return Ok(vec![Folder::synthesized_default(
                &tenant.login,
                host.as_ref(),
            )]);
        }

        Ok(records
            .iter()
            .map(|record| Folder::from_record(record, host.as_ref()))
            .collect())
    }

    /// Creates a folder row and its directory on the tenant's media host.
    pub async fn create(&self, tenant: &TenantIdentity, name: &str) -> AppResult<CreatedFolder> {
        let name = validate_folder_name(name)?;

        let host = self.hosts.resolve_host(tenant.tenant_id).await.ok_or_else(|| {
            AppError::host_unavailable("No media server is available for this account")
                .with_details("No media server is assigned to the tenant")
        })?;

        let ftp_dir = format!("/{}/{}", tenant.login, name);
        let id = self
            .store
            .insert_folder(&NewFolder {
                owner_id: tenant.tenant_id,
                server_id: host.host_id,
                login: tenant.login.clone(),
                email: tenant.email.clone(),
                name: name.to_string(),
                ftp_dir: ftp_dir.clone(),
            })
            .await?;

        let dir = format!("{}/{}", self.hosts.content_root(&tenant.login), name);
        let physical: PhysicalSync = self
            .storage
            .for_host(host.host_id)
            .create_dir(&dir)
            .await
            .into();

        match &physical {
            PhysicalSync::Failed { reason } => warn!(
                folder_id = id,
                host_id = host.host_id,
                dir = %dir,
                reason = %reason,
                "Folder row created but host directory could not be created"
            ),
            _ => info!(
                folder_id = id,
                tenant_id = tenant.tenant_id,
                host_id = host.host_id,
                ftp_dir = %ftp_dir,
                "Folder created"
            ),
        }

        Ok(CreatedFolder {
            folder: Folder {
                id,
                name: name.to_string(),
                host_id: Some(host.host_id),
                host_address: Some(host.host_address),
                ftp_dir: Some(ftp_dir),
            },
            physical,
        })
    }

    /// Deletes an owned folder that no content refers to.
    pub async fn delete(
        &self,
        tenant: &TenantIdentity,
        folder_id: i64,
    ) -> AppResult<DeletedFolder> {
        let record = self
            .store
            .find_owned_folder(folder_id, tenant.tenant_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let ftp_dir = record.ftp_dir.as_deref().filter(|d| !d.is_empty());

        let references = self.store.count_folder_references(folder_id, ftp_dir).await?;
        if references > 0 {
            return Err(AppError::new(
                ErrorKind::Conflict,
                "Cannot delete a folder that contains videos",
            )
            .with_details("Remove all videos from the folder before deleting it"));
        }

        let physical = self.remove_directory(tenant, ftp_dir).await;
        if let PhysicalSync::Failed { reason } = &physical {
            warn!(
                folder_id,
                reason = %reason,
                "Host directory could not be removed; deleting folder row anyway"
            );
        }

        let removed_rows = self
            .store
            .delete_owned_folder(folder_id, tenant.tenant_id)
            .await?;

        info!(
            folder_id,
            tenant_id = tenant.tenant_id,
            removed_rows,
            "Folder deleted"
        );

        Ok(DeletedFolder {
            folder_id,
            removed_rows,
            physical,
        })
    }

    async fn remove_directory(
        &self,
        tenant: &TenantIdentity,
        ftp_dir: Option<&str>,
    ) -> PhysicalSync {
        let Some(ftp_dir) = ftp_dir else {
            return PhysicalSync::skipped("folder has no directory path");
        };
        let Some(host) = self.hosts.resolve_host(tenant.tenant_id).await else {
            return PhysicalSync::skipped("no media server assigned");
        };

        let tenant_root = format!("/{}", tenant.login);
        if ftp_dir.trim_end_matches('/') == tenant_root {
            return PhysicalSync::skipped("folder maps to the tenant content root");
        }
        let Some(relative) = ftp_dir
            .strip_prefix(&tenant_root)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.trim_end_matches('/'))
        else {
            return PhysicalSync::skipped("folder path is outside the tenant content root");
        };

        let dir = format!("{}/{}", self.hosts.content_root(&tenant.login), relative);
        self.storage
            .for_host(host.host_id)
            .delete_dir(&dir)
            .await
            .into()
    }
}

/// A folder name is a single, non-blank path segment.
fn validate_folder_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Folder name is required"));
    }
    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(AppError::validation(
            "Folder name must be a single path segment",
        ));
    }
    Ok(name)
}
