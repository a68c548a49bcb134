//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of a successful folder deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteFolderResponse {
    /// Always true.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` or `error`.
    pub status: &'static str,
    /// `connected` or `disconnected`.
    pub database: &'static str,
    /// Probe failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the probe ran.
    pub timestamp: DateTime<Utc>,
}
