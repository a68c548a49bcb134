//! Host assignment repository.

use sqlx::PgPool;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_entity::host::HostAssignment;

/// Repository for the tenant → media server mapping.
#[derive(Debug, Clone)]
pub struct HostAssignmentRepository {
    pool: PgPool,
}

impl HostAssignmentRepository {
    /// Create a new host assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the media server assigned to a tenant.
    ///
    /// `tenant_id` is the primary key of `host_assignments`, so at most one row matches.
    pub async fn find_by_tenant(&self, tenant_id: i64) -> AppResult<Option<HostAssignment>> {
        sqlx::query_as::<_, HostAssignment>(
            "SELECT ha.tenant_id, ms.id AS host_id, ms.name AS host_name, ms.address AS host_address \
             FROM host_assignments ha \
             INNER JOIN media_servers ms ON ms.id = ha.server_id \
             WHERE ha.tenant_id = $1",
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find host assignment", e)
        })
    }
}
