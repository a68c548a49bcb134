//! Custom Axum extractors.

pub mod auth;

pub use auth::{AuthTenant, bearer_token};
