//! Host assignment model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The media server currently assigned to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HostAssignment {
    /// Tenant the assignment belongs to.
    pub tenant_id: i64,
    /// Media server id.
    pub host_id: i64,
    /// Media server display name.
    pub host_name: Option<String>,
    /// Address clients use to reach the media server.
    pub host_address: String,
}
