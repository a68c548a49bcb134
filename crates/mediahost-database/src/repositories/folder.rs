//! Folder repository over the `streamings` table.

use sqlx::PgPool;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_entity::folder::{FolderRecord, FolderStatus, NewFolder};

const FOLDER_COLUMNS: &str =
    "id, owner_id, server_id, login, email, name, ftp_dir, status, created_at";

/// Repository for tenant folder rows.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the active folders owned by a tenant, oldest first.
    pub async fn find_active_by_owner(&self, tenant_id: i64) -> AppResult<Vec<FolderRecord>> {
        sqlx::query_as::<_, FolderRecord>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM streamings \
             WHERE (owner_id = $1 OR id = $1) AND status = $2 ORDER BY id ASC"
        ))
        .bind(tenant_id)
        .bind(FolderStatus::Active.as_i16())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Find a folder by id, scoped to the owning tenant.
    pub async fn find_owned(
        &self,
        folder_id: i64,
        tenant_id: i64,
    ) -> AppResult<Option<FolderRecord>> {
        sqlx::query_as::<_, FolderRecord>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM streamings \
             WHERE id = $1 AND (owner_id = $2 OR id = $2)"
        ))
        .bind(folder_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Insert a folder row and return its generated id.
    pub async fn create(&self, data: &NewFolder) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO streamings (owner_id, server_id, login, email, name, ftp_dir, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(data.owner_id)
        .bind(data.server_id)
        .bind(&data.login)
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.ftp_dir)
        .bind(FolderStatus::Active.as_i16())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    /// Delete a folder row scoped to its owner; returns the affected row count.
    pub async fn delete_owned(&self, folder_id: i64, tenant_id: i64) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM streamings WHERE id = $1 AND (owner_id = $2 OR id = $2)")
                .bind(folder_id)
                .bind(tenant_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
                })?;
        Ok(result.rows_affected())
    }
}
