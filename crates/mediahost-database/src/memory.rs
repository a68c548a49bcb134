//! In-memory [`MetadataStore`] for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_entity::folder::{FolderRecord, FolderStatus, NewFolder};
use mediahost_entity::host::HostAssignment;
use mediahost_entity::tenant::TenantIdentity;

use crate::store::MetadataStore;

#[derive(Debug, Default)]
struct Tables {
    folders: Vec<FolderRecord>,
    hosts: HashMap<i64, HostAssignment>,
    content_paths: Vec<String>,
    last_folder_id: i64,
}

/// Metadata store held entirely in process memory.
///
/// Mirrors the row semantics of the PostgreSQL gateway, including the
/// `LIKE` based content membership test. [`set_offline`](Self::set_offline)
/// makes every call fail with a database error; [`set_read_only`](Self::set_read_only)
/// fails only the folder writes.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    tables: RwLock<Tables>,
    offline: AtomicBool,
    read_only: AtomicBool,
}

impl InMemoryMetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully specified folder row, keeping its id.
    pub async fn put_folder(&self, record: FolderRecord) {
        let mut tables = self.tables.write().await;
        tables.last_folder_id = tables.last_folder_id.max(record.id);
        tables.folders.retain(|f| f.id != record.id);
        tables.folders.push(record);
        tables.folders.sort_by_key(|f| f.id);
    }

    /// Assign a media server to a tenant, replacing any previous assignment.
    pub async fn assign_host(&self, tenant_id: i64, host_id: i64, address: &str) {
        let assignment = HostAssignment {
            tenant_id,
            host_id,
            host_name: None,
            host_address: address.to_string(),
        };
        self.tables.write().await.hosts.insert(tenant_id, assignment);
    }

    /// Register a content row with the given path.
    pub async fn add_content_path(&self, path: &str) {
        self.tables
            .write()
            .await
            .content_paths
            .push(path.to_string());
    }

    /// Snapshot of a folder row by id, regardless of owner.
    pub async fn folder(&self, folder_id: i64) -> Option<FolderRecord> {
        self.tables
            .read()
            .await
            .folders
            .iter()
            .find(|f| f.id == folder_id)
            .cloned()
    }

    /// Number of folder rows.
    pub async fn folder_count(&self) -> usize {
        self.tables.read().await.folders.len()
    }

    /// Toggle simulated outage.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Toggle rejection of folder inserts and deletes.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn ensure_writable(&self, action: &str) -> AppResult<()> {
        self.ensure_online()?;
        if self.read_only.load(Ordering::SeqCst) {
            return Err(AppError::with_source(
                ErrorKind::Database,
                format!("Failed to {action} folder"),
                std::io::Error::other("cannot execute statement in a read-only transaction"),
            ));
        }
        Ok(())
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::database("Metadata store is unavailable"));
        }
        Ok(())
    }
}

fn is_owned_by(record: &FolderRecord, tenant_id: i64) -> bool {
    record.owner_id == tenant_id || record.id == tenant_id
}

/// SQL `LIKE` matching with `%` and `_` wildcards and no escape character.
fn like_matches(pattern: &str, value: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let v: Vec<char> = value.chars().collect();
    // matches[j]: pattern prefix consumed so far matches v[..j]
    let mut matches = vec![false; v.len() + 1];
    matches[0] = true;
    for pc in p {
        let mut next = vec![false; v.len() + 1];
        match pc {
            '%' => {
                let mut seen = false;
                for j in 0..=v.len() {
                    seen |= matches[j];
                    next[j] = seen;
                }
            }
            _ => {
                for j in 1..=v.len() {
                    next[j] = matches[j - 1] && (pc == '_' || pc == v[j - 1]);
                }
            }
        }
        matches = next;
    }
    matches[v.len()]
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn list_active_folders(&self, tenant_id: i64) -> AppResult<Vec<FolderRecord>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .folders
            .iter()
            .filter(|f| is_owned_by(f, tenant_id) && f.is_active())
            .cloned()
            .collect())
    }

    async fn insert_folder(&self, folder: &NewFolder) -> AppResult<i64> {
        self.ensure_writable("create")?;
        let mut tables = self.tables.write().await;
        tables.last_folder_id += 1;
        let id = tables.last_folder_id;
        tables.folders.push(FolderRecord {
            id,
            owner_id: folder.owner_id,
            server_id: Some(folder.server_id),
            login: folder.login.clone(),
            email: folder.email.clone(),
            name: folder.name.clone(),
            ftp_dir: Some(folder.ftp_dir.clone()),
            status: FolderStatus::Active.as_i16(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_owned_folder(
        &self,
        folder_id: i64,
        tenant_id: i64,
    ) -> AppResult<Option<FolderRecord>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .folders
            .iter()
            .find(|f| f.id == folder_id && is_owned_by(f, tenant_id))
            .cloned())
    }

    async fn count_folder_references(
        &self,
        folder_id: i64,
        ftp_dir: Option<&str>,
    ) -> AppResult<i64> {
        self.ensure_online()?;
        let by_id = format!("%/{folder_id}/%");
        let by_dir = ftp_dir
            .filter(|d| !d.is_empty())
            .map(|d| format!("%{d}%"));
        let count = self
            .tables
            .read()
            .await
            .content_paths
            .iter()
            .filter(|path| {
                like_matches(&by_id, path)
                    || by_dir.as_deref().is_some_and(|p| like_matches(p, path))
            })
            .count();
        Ok(count as i64)
    }

    async fn delete_owned_folder(&self, folder_id: i64, tenant_id: i64) -> AppResult<u64> {
        self.ensure_writable("delete")?;
        let mut tables = self.tables.write().await;
        let before = tables.folders.len();
        tables
            .folders
            .retain(|f| !(f.id == folder_id && is_owned_by(f, tenant_id)));
        Ok((before - tables.folders.len()) as u64)
    }

    async fn find_host_assignment(&self, tenant_id: i64) -> AppResult<Option<HostAssignment>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.hosts.get(&tenant_id).cloned())
    }

    async fn find_tenant_by_path_segment(
        &self,
        segment: &str,
    ) -> AppResult<Option<TenantIdentity>> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .folders
            .iter()
            .find(|f| f.login == segment || f.name == segment)
            .map(|f| TenantIdentity::new(f.owner_id, f.login.clone(), f.email.clone())))
    }

    async fn test_connection(&self) -> AppResult<bool> {
        self.ensure_online()?;
        Ok(true)
    }
}
