//! # mediahost-service
//!
//! Business logic for MediaHost. Services are built once at startup with
//! their collaborators injected as `Arc`s and hold no per-request state.

pub mod content;
pub mod folder;
pub mod host;
pub mod identity;

pub use content::{ContentOutcome, ContentRequest, ContentService};
pub use folder::{CreatedFolder, DeletedFolder, FolderService, PhysicalSync};
pub use host::HostResolver;
pub use identity::TenantIdentityResolver;
