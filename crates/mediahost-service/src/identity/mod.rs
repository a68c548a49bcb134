//! Tenant identity resolution.

pub mod resolver;

pub use resolver::TenantIdentityResolver;
