//! # mediahost-core
//!
//! Core crate for MediaHost. Contains the traits implemented by the
//! database and storage crates, configuration schemas, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other MediaHost crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
