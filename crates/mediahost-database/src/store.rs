//! The metadata store gateway.
//!
//! Services talk to the relational store only through [`MetadataStore`].
//! Every method runs a single bound-parameter statement and carries no
//! business rules; failures surface as [`ErrorKind::Database`] errors.

use async_trait::async_trait;
use sqlx::PgPool;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_entity::folder::{FolderRecord, NewFolder};
use mediahost_entity::host::HostAssignment;
use mediahost_entity::tenant::TenantIdentity;

use crate::repositories::{
    ContentReferenceRepository, FolderRepository, HostAssignmentRepository, TenantRepository,
};

/// Typed query interface over folder, host and content metadata.
#[async_trait]
pub trait MetadataStore: Send + Sync + std::fmt::Debug + 'static {
    /// Active folders owned by `tenant_id`, ordered by id.
    async fn list_active_folders(&self, tenant_id: i64) -> AppResult<Vec<FolderRecord>>;

    /// Insert a folder row and return the generated id.
    async fn insert_folder(&self, folder: &NewFolder) -> AppResult<i64>;

    /// Find a folder by id if it is owned by `tenant_id`.
    async fn find_owned_folder(
        &self,
        folder_id: i64,
        tenant_id: i64,
    ) -> AppResult<Option<FolderRecord>>;

    /// Count content references lexically inside a folder.
    ///
    /// Without a usable `ftp_dir` only the `/{folder_id}/` pattern applies.
    async fn count_folder_references(
        &self,
        folder_id: i64,
        ftp_dir: Option<&str>,
    ) -> AppResult<i64>;

    /// Delete a folder row owned by `tenant_id`; returns affected rows.
    async fn delete_owned_folder(&self, folder_id: i64, tenant_id: i64) -> AppResult<u64>;

    /// The media server currently assigned to a tenant.
    async fn find_host_assignment(&self, tenant_id: i64) -> AppResult<Option<HostAssignment>>;

    /// Resolve a tenant from a login or folder name.
    async fn find_tenant_by_path_segment(
        &self,
        segment: &str,
    ) -> AppResult<Option<TenantIdentity>>;

    /// Probe connectivity.
    async fn test_connection(&self) -> AppResult<bool>;
}

/// PostgreSQL-backed [`MetadataStore`].
#[derive(Debug, Clone)]
pub struct PgMetadataStore {
    pool: PgPool,
    folders: FolderRepository,
    hosts: HostAssignmentRepository,
    content: ContentReferenceRepository,
    tenants: TenantRepository,
}

impl PgMetadataStore {
    /// Build the gateway and its repositories over one pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            folders: FolderRepository::new(pool.clone()),
            hosts: HostAssignmentRepository::new(pool.clone()),
            content: ContentReferenceRepository::new(pool.clone()),
            tenants: TenantRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl MetadataStore for PgMetadataStore {
    async fn list_active_folders(&self, tenant_id: i64) -> AppResult<Vec<FolderRecord>> {
        self.folders.find_active_by_owner(tenant_id).await
    }

    async fn insert_folder(&self, folder: &NewFolder) -> AppResult<i64> {
        self.folders.create(folder).await
    }

    async fn find_owned_folder(
        &self,
        folder_id: i64,
        tenant_id: i64,
    ) -> AppResult<Option<FolderRecord>> {
        self.folders.find_owned(folder_id, tenant_id).await
    }

    async fn count_folder_references(
        &self,
        folder_id: i64,
        ftp_dir: Option<&str>,
    ) -> AppResult<i64> {
        self.content.count_in_folder(folder_id, ftp_dir).await
    }

    async fn delete_owned_folder(&self, folder_id: i64, tenant_id: i64) -> AppResult<u64> {
        self.folders.delete_owned(folder_id, tenant_id).await
    }

    async fn find_host_assignment(&self, tenant_id: i64) -> AppResult<Option<HostAssignment>> {
        self.hosts.find_by_tenant(tenant_id).await
    }

    async fn find_tenant_by_path_segment(
        &self,
        segment: &str,
    ) -> AppResult<Option<TenantIdentity>> {
        self.tenants.find_by_path_segment(segment).await
    }

    async fn test_connection(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
