//! Media host assignment entities.

pub mod model;

pub use model::HostAssignment;
