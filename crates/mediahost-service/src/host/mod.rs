//! Media server resolution for tenants.

pub mod resolver;

pub use resolver::HostResolver;
