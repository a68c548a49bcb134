//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::host::HostAssignment;

/// Row status of a folder in the `streamings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    /// Folder is visible to its tenant.
    Active,
    /// Folder is hidden (suspended by an operator).
    Inactive,
}

impl FolderStatus {
    /// Stored column value.
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Active => 1,
            Self::Inactive => 0,
        }
    }
}

/// A folder row as stored in the metadata store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FolderRecord {
    /// Unique folder identifier.
    pub id: i64,
    /// Tenant that owns the folder.
    pub owner_id: i64,
    /// Media server the folder was created on (null on legacy rows).
    pub server_id: Option<i64>,
    /// Login of the owning tenant.
    pub login: String,
    /// Email of the owning tenant.
    pub email: Option<String>,
    /// Display name.
    pub name: String,
    /// Canonical path under the tenant root, e.g. `/alice/movies`.
    pub ftp_dir: Option<String>,
    /// Row status (1 = active).
    pub status: i16,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl FolderRecord {
    /// Check whether the row is active.
    pub fn is_active(&self) -> bool {
        self.status == FolderStatus::Active.as_i16()
    }
}

/// Data required to insert a new folder row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Owning tenant.
    pub owner_id: i64,
    /// Media server the folder lives on.
    pub server_id: i64,
    /// Login of the owning tenant.
    pub login: String,
    /// Email of the owning tenant.
    pub email: Option<String>,
    /// Display name.
    pub name: String,
    /// Canonical path, `/{login}/{name}`.
    pub ftp_dir: String,
}

/// A folder as presented to tenants.
///
/// Field names on the wire are the ones existing clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Media server id.
    #[serde(rename = "servidor_id")]
    pub host_id: Option<i64>,
    /// Media server address.
    #[serde(rename = "servidor_ip")]
    pub host_address: Option<String>,
    /// Canonical path under the tenant root.
    pub ftp_dir: Option<String>,
}

impl Folder {
    /// Build the presented folder from a stored row.
    ///
    /// The server id comes from the row itself while the address is the
    /// one of the tenant's currently assigned host.
    pub fn from_record(record: &FolderRecord, host: Option<&HostAssignment>) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            host_id: record.server_id,
            host_address: host.map(|h| h.host_address.clone()),
            ftp_dir: record.ftp_dir.clone(),
        }
    }

    /// The default folder shown to a tenant that has no folder rows yet.
    pub fn synthesized_default(login: &str, host: Option<&HostAssignment>) -> Self {
        Self {
            id: 1,
            name: login.to_string(),
            host_id: host.map(|h| h.host_id),
            host_address: host.map(|h| h.host_address.clone()),
            ftp_dir: Some(format!("/{login}/")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostAssignment {
        HostAssignment {
            tenant_id: 7,
            host_id: 3,
            host_name: Some("edge-3".into()),
            host_address: "10.0.0.3".into(),
        }
    }

    #[test]
    fn test_synthesized_default_without_host() {
        let folder = Folder::synthesized_default("alice", None);
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "nome": "alice",
                "servidor_id": null,
                "servidor_ip": null,
                "ftp_dir": "/alice/"
            })
        );
    }

    #[test]
    fn test_from_record_keeps_row_server_id() {
        let record = FolderRecord {
            id: 42,
            owner_id: 7,
            server_id: Some(1),
            login: "alice".into(),
            email: Some("alice@example.com".into()),
            name: "movies".into(),
            ftp_dir: Some("/alice/movies".into()),
            status: 1,
            created_at: Utc::now(),
        };
        let folder = Folder::from_record(&record, Some(&host()));
        assert_eq!(folder.host_id, Some(1));
        assert_eq!(folder.host_address.as_deref(), Some("10.0.0.3"));
        assert!(record.is_active());
    }
}
