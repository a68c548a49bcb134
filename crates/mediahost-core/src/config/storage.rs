//! Media host storage configuration.

use serde::{Deserialize, Serialize};

/// Where tenant content lives on the media hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Host-local base directory; a tenant's content root is `{content_base}/{login}`.
    #[serde(default = "default_content_base")]
    pub content_base: String,
    /// Content root of the global fallback host, consulted after the tenant's host.
    #[serde(default = "default_fallback_root")]
    pub fallback_root: String,
    /// Local mount point used for hosts without an explicit mount.
    #[serde(default = "default_mount")]
    pub default_mount: String,
    /// Per-host mount points for remote hosts exposed through the local filesystem.
    #[serde(default)]
    pub mounts: Vec<HostMountConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            content_base: default_content_base(),
            fallback_root: default_fallback_root(),
            default_mount: default_mount(),
            mounts: Vec::new(),
        }
    }
}

/// Maps a media host id to the local path its filesystem is mounted at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostMountConfig {
    /// Media server id (`media_servers.id`).
    pub host_id: i64,
    /// Local mount root.
    pub root: String,
}

fn default_content_base() -> String {
    "/usr/local/WowzaStreamingEngine/content".to_string()
}

fn default_fallback_root() -> String {
    "/usr/local/WowzaStreamingEngine/content".to_string()
}

fn default_mount() -> String {
    "/".to_string()
}
