//! Resolves content requests to a file on the right media host.
//!
//! Candidates are tried in order: the requesting tenant's host under its
//! content root, then the global fallback root on the default provider.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use mediahost_core::config::StorageConfig;
use mediahost_core::traits::storage::{ByteStream, StorageProvider};
use mediahost_storage::StorageManager;

use super::range::{ByteRange, RangeDecision};
use crate::host::HostResolver;
use crate::identity::TenantIdentityResolver;

/// An inbound content request.
#[derive(Debug, Clone, Default)]
pub struct ContentRequest {
    /// Request path below the content mount, starting with `/`.
    pub path: String,
    /// Bearer token, if one was sent.
    pub bearer: Option<String>,
    /// Raw `Range` header.
    pub range: Option<String>,
    /// Resolve headers only; do not open a body stream.
    pub head_only: bool,
}

/// Which candidate served the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// The requesting tenant's media server.
    TenantHost {
        /// Media server id.
        host_id: i64,
    },
    /// The global fallback content root.
    Fallback,
}

/// A resolved file ready to be sent.
pub struct ContentFile {
    /// Candidate that held the file.
    pub source: ContentSource,
    /// Full file size in bytes.
    pub size: u64,
    /// Modification time, when the host reports one.
    pub last_modified: Option<DateTime<Utc>>,
    /// Requested slice, if a satisfiable range was asked for.
    pub range: Option<ByteRange>,
    /// Body stream; `None` for header-only requests.
    pub body: Option<ByteStream>,
}

impl std::fmt::Debug for ContentFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFile")
            .field("source", &self.source)
            .field("size", &self.size)
            .field("last_modified", &self.last_modified)
            .field("range", &self.range)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

impl ContentFile {
    /// Number of bytes the response body carries.
    pub fn content_length(&self) -> u64 {
        self.range.map_or(self.size, |r| r.byte_count())
    }
}

/// Result of resolving a content request.
#[derive(Debug)]
pub enum ContentOutcome {
    /// A file was found.
    Found(ContentFile),
    /// No candidate holds the file.
    NotFound,
    /// The file exists but the requested range lies outside it.
    RangeNotSatisfiable {
        /// File size in bytes.
        size: u64,
    },
    /// Both the tenant host and the fallback failed with an I/O error.
    ServerError,
}

enum Attempt {
    Hit(ContentOutcome),
    Miss,
    Failed,
}

/// Resolves and opens content files.
#[derive(Debug, Clone)]
pub struct ContentService {
    identity: Arc<TenantIdentityResolver>,
    hosts: Arc<HostResolver>,
    storage: Arc<StorageManager>,
    fallback_root: String,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(
        identity: Arc<TenantIdentityResolver>,
        hosts: Arc<HostResolver>,
        storage: Arc<StorageManager>,
        config: &StorageConfig,
    ) -> Self {
        Self {
            identity,
            hosts,
            storage,
            fallback_root: config.fallback_root.trim_end_matches('/').to_string(),
        }
    }

    /// Find the requested file and open it.
    pub async fn deliver(&self, request: ContentRequest) -> ContentOutcome {
        let path = normalize_path(&request.path);
        if path.split('/').any(|segment| segment == "..") {
            debug!(path = %path, "Rejected content path with parent segments");
            return ContentOutcome::NotFound;
        }

        let mut candidates: Vec<(ContentSource, Arc<dyn StorageProvider>, String)> = Vec::new();

        if let Some(tenant) = self.identity.resolve(request.bearer.as_deref(), &path).await {
            if let Some(host) = self.hosts.resolve_host(tenant.tenant_id).await {
                candidates.push((
                    ContentSource::TenantHost {
                        host_id: host.host_id,
                    },
                    self.storage.for_host(host.host_id),
                    format!("{}{}", self.hosts.content_root(&tenant.login), path),
                ));
            }
        }
        candidates.push((
            ContentSource::Fallback,
            self.storage.default_provider(),
            format!("{}{}", self.fallback_root, path),
        ));

        let tried = candidates.len();
        let mut failures = 0;
        for (source, provider, file_path) in candidates {
            match self.try_candidate(source, provider.as_ref(), &file_path, &request).await {
                Attempt::Hit(outcome) => return outcome,
                Attempt::Miss => debug!(file = %file_path, "Content candidate missing"),
                Attempt::Failed => failures += 1,
            }
        }

        if tried == 2 && failures == 2 {
            ContentOutcome::ServerError
        } else {
            debug!(path = %path, "Content not found on any host");
            ContentOutcome::NotFound
        }
    }

    async fn try_candidate(
        &self,
        source: ContentSource,
        provider: &dyn StorageProvider,
        file_path: &str,
        request: &ContentRequest,
    ) -> Attempt {
        let meta = match provider.metadata(file_path).await {
            Ok(meta) if meta.is_directory => return Attempt::Miss,
            Ok(meta) => meta,
            Err(e) if e.is_not_found() => return Attempt::Miss,
            Err(e) => {
                warn!(file = %file_path, error = %e, "Content candidate unreadable");
                return Attempt::Failed;
            }
        };

        let range = match RangeDecision::evaluate(request.range.as_deref(), meta.size_bytes) {
            RangeDecision::Full => None,
            RangeDecision::Partial(range) => Some(range),
            RangeDecision::Unsatisfiable => {
                return Attempt::Hit(ContentOutcome::RangeNotSatisfiable {
                    size: meta.size_bytes,
                });
            }
        };

        let body = if request.head_only {
            None
        } else {
            let (offset, length) = range.map_or((0, None), |r| (r.start, Some(r.byte_count())));
            match provider.read_range(file_path, offset, length).await {
                Ok(stream) => Some(stream),
                Err(e) if e.is_not_found() => return Attempt::Miss,
                Err(e) => {
                    warn!(file = %file_path, error = %e, "Failed to open content file");
                    return Attempt::Failed;
                }
            }
        };

        debug!(file = %file_path, source = ?source, size = meta.size_bytes, "Serving content");
        Attempt::Hit(ContentOutcome::Found(ContentFile {
            source,
            size: meta.size_bytes,
            last_modified: meta.last_modified,
            range,
            body,
        }))
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
