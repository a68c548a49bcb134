//! Tenant-aware content delivery.

pub mod policy;
pub mod range;
pub mod service;

pub use policy::ContentPolicy;
pub use range::{ByteRange, RangeDecision};
pub use service::{ContentFile, ContentOutcome, ContentRequest, ContentService, ContentSource};
