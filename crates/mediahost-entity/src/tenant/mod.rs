//! Tenant identity.

pub mod identity;

pub use identity::{TenantIdentity, login_from_email};
