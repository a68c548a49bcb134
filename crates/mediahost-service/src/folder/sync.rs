//! Outcome of a best-effort physical directory operation.

use serde::Serialize;

use mediahost_core::result::AppResult;

/// What happened on the media host while a folder row was mutated.
///
/// Metadata is authoritative: none of these variants changes the outcome
/// of the lifecycle operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhysicalSync {
    /// The directory operation succeeded.
    Applied,
    /// No directory operation was attempted.
    Skipped {
        /// Why nothing was attempted.
        reason: String,
    },
    /// The directory operation was attempted and failed.
    Failed {
        /// Diagnostic from the storage provider.
        reason: String,
    },
}

impl PhysicalSync {
    /// Skip with a reason.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Whether the host directory now matches the metadata.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<AppResult<()>> for PhysicalSync {
    fn from(result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(e) => Self::Failed {
                reason: match e.diagnostic() {
                    Some(detail) => format!("{}: {detail}", e.message),
                    None => e.message,
                },
            },
        }
    }
}
