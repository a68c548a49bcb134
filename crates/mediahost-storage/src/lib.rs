//! # mediahost-storage
//!
//! Storage providers for media hosts. Every host filesystem is reached by
//! path; [`StorageManager`] maps media server ids to the provider that can
//! see that server's tree.

pub mod manager;
pub mod mime;
pub mod providers;

pub use manager::StorageManager;
pub use mime::mime_from_path;
