//! Repository implementations for MediaHost tables.

pub mod content;
pub mod folder;
pub mod host;
pub mod tenant;

pub use content::ContentReferenceRepository;
pub use folder::FolderRepository;
pub use host::HostAssignmentRepository;
pub use tenant::TenantRepository;
