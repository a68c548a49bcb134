//! # mediahost-database
//!
//! PostgreSQL connection management, repository implementations and the
//! [`MetadataStore`] gateway used by the service layer.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::InMemoryMetadataStore;
pub use store::{MetadataStore, PgMetadataStore};
