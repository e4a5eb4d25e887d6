//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two JSON endpoints and the health probe under a
//! single Axum router. The compiled chat UI is served as static files from
//! the client dist directory for every path the API does not claim.

pub mod chat;
pub mod files;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use protocol::{CHAT_PATH, PARSE_FILE_PATH};

use crate::state::AppState;

/// JSON API routes. Kept separate from static serving so tests can drive
/// them without a dist directory on disk.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route(CHAT_PATH, post(chat::chat))
        .route(PARSE_FILE_PATH, post(files::parse_file).layer(upload_limit))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the built chat UI.
fn client_dir() -> PathBuf {
    std::env::var("CLIENT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application: API routes plus the static chat UI at `/`.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(client_dir()).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
