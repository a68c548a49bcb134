//! Content reference lookups over `playlist_videos`.

use sqlx::PgPool;

use mediahost_core::error::{AppError, ErrorKind};
use mediahost_core::result::AppResult;

/// Repository answering "does any content still point into this folder?".
#[derive(Debug, Clone)]
pub struct ContentReferenceRepository {
    pool: PgPool,
}

impl ContentReferenceRepository {
    /// Create a new content reference repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count content rows whose path lexically falls inside a folder.
    ///
    /// A row matches when its path contains `/{folder_id}/` or the folder's
    /// `ftp_dir`. `ftp_dir` is used as-is, so `%` and `_` in it act as
    /// wildcards. A missing or empty `ftp_dir` only checks the id pattern.
    pub async fn count_in_folder(&self, folder_id: i64, ftp_dir: Option<&str>) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM playlist_videos WHERE path LIKE $1 OR path LIKE $2",
        )
        .bind(format!("%/{folder_id}/%"))
        .bind(ftp_dir.filter(|d| !d.is_empty()).map(|d| format!("%{d}%")))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count folder content", e)
        })
    }
}
