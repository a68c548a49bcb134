//! Folder lifecycle: metadata rows kept in step with host directories.

pub mod service;
pub mod sync;

pub use service::{CreatedFolder, DeletedFolder, FolderService};
pub use sync::PhysicalSync;
