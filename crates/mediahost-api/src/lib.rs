//! # mediahost-api
//!
//! HTTP API layer for MediaHost built on Axum.
//!
//! Serves the tenant folder endpoints under `/api`, tenant-aware file
//! delivery under `/content`, and the health probe.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
