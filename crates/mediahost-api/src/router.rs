//! Route definitions for the MediaHost HTTP API.
//!
//! Management routes live under `/api` behind the configured CORS policy.
//! `/content` answers with its own permissive headers so media players on
//! any origin can fetch files.

use axum::{
    Router,
    routing::{delete, get},
};

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the router with every route and the state threaded through.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(health_routes())
        .layer(build_cors_layer(&state.config.server.cors));

    Router::new()
        .nest("/api", api_routes)
        .merge(content_routes())
        .with_state(state)
}

/// Tenant folder lifecycle
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// File delivery
fn content_routes() -> Router<AppState> {
    Router::new().route(
        "/content/{*path}",
        get(handlers::content::serve_content)
            .head(handlers::content::serve_content)
            .options(handlers::content::serve_content),
    )
}
