//! HTTP handlers.

pub mod content;
pub mod folder;
pub mod health;
