//! Local filesystem storage provider.
//!
//! Media hosts are mounted into the server's filesystem; a provider is
//! rooted at the mount point and treats host paths as relative to it.

use std::io::SeekFrom;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use tracing::debug;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;
use mediahost_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};

/// Storage provider backed by a local (or locally mounted) directory tree.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Mount point that host paths are resolved against.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a provider rooted at `root`. The directory is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Mount point of this provider.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve a host path to a path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }
}

fn io_error(err: std::io::Error, action: &str, path: &str) -> AppError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AppError::with_source(ErrorKind::NotFound, format!("Path not found: {path}"), err)
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action}: {path}"), err)
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match fs::metadata(&self.root).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(e, "inspect storage root", &self.root.to_string_lossy())),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        fs::try_exists(self.resolve(path))
            .await
            .map_err(|e| io_error(e, "check existence of", path))
    }

    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta> {
        let meta = fs::metadata(self.resolve(path))
            .await
            .map_err(|e| io_error(e, "get metadata", path))?;

        let last_modified = meta.modified().ok().map(chrono::DateTime::<chrono::Utc>::from);

        Ok(StorageObjectMeta {
            path: path.to_string(),
            size_bytes: meta.len(),
            last_modified,
            is_directory: meta.is_dir(),
        })
    }

    async fn read_range(
        &self,
        path: &str,
        offset: u64,
        length: Option<u64>,
    ) -> AppResult<ByteStream> {
        let mut file = fs::File::open(self.resolve(path))
            .await
            .map_err(|e| io_error(e, "open file", path))?;

        if offset > 0 {
            file.seek(SeekFrom::Start(offset))
                .await
                .map_err(|e| io_error(e, "seek in file", path))?;
        }

        debug!(path, offset, length, "Streaming file");
        match length {
            Some(len) => Ok(Box::pin(ReaderStream::new(file.take(len)))),
            None => Ok(Box::pin(ReaderStream::new(file))),
        }
    }

    async fn create_dir(&self, path: &str) -> AppResult<()> {
        fs::create_dir_all(self.resolve(path))
            .await
            .map_err(|e| io_error(e, "create directory", path))?;
        debug!(path, "Created directory");
        Ok(())
    }

    async fn delete_dir(&self, path: &str) -> AppResult<()> {
        match fs::remove_dir_all(self.resolve(path)).await {
            Ok(()) => {
                debug!(path, "Deleted directory");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e, "delete directory", path)),
        }
    }
}
