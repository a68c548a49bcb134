//! Tenant lookups keyed by request path segments.

use sqlx::PgPool;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_entity::tenant::TenantIdentity;

#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    owner_id: i64,
    login: String,
    email: Option<String>,
}

/// Repository resolving tenants from folder rows.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the tenant whose login or folder name equals `segment`.
    ///
    /// The oldest matching row wins.
    pub async fn find_by_path_segment(&self, segment: &str) -> AppResult<Option<TenantIdentity>> {
        let row = sqlx::query_as::<_, TenantRow>(
            "SELECT owner_id, login, email FROM streamings \
             WHERE login = $1 OR name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(segment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve tenant by path", e)
        })?;

        Ok(row.map(|r| TenantIdentity::new(r.owner_id, r.login, r.email)))
    }
}
