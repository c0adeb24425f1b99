//! # Intranet API
//!
//! A small HTTP surface of four handlers (status, user search, token verification
//! and file upload) that each react to caller-supplied input.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the four endpoints and a health check
//! - [`services`] - Injected collaborators: the record store and the token verifier
//! - [`models`] - Shared state and decoded request types
//! - [`error`] - Error taxonomy and its HTTP mapping
//! - [`utils`] - Constants, configuration and input helpers

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{health_check, search_users, system_status, upload_file, verify_token};
use crate::models::AppState;
use crate::services::store::{PgRecordStore, RecordStore};
use crate::services::token::TokenVerifier;
use crate::utils::config::AppConfig;
use crate::utils::constant::VERIFICATION_KEY;

/// Creates an Axum router backed by a PostgreSQL record store.
///
/// This is a convenience function that wraps `db_pool` in a [`PgRecordStore`]
/// and calls [`app_with_store`] with the configured upload limit.
#[inline]
pub fn app(db_pool: PgPool, config: &AppConfig) -> Router {
    app_with_store(
        Arc::new(PgRecordStore::new(db_pool)),
        config.upload_body_limit,
    )
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `record_store` - Store answering the record count and username lookups
/// * `upload_body_limit` - Maximum request body size accepted by the upload route
///
/// The token verifier is always built from [`VERIFICATION_KEY`].
pub fn app_with_store(record_store: Arc<dyn RecordStore>, upload_body_limit: usize) -> Router {
    info!(upload_body_limit, "Building application router");

    let state = Arc::new(AppState::new(
        record_store,
        TokenVerifier::from_secret(VERIFICATION_KEY),
    ));

    let api_routes = Router::new()
        .route("/api/v1/status", get(system_status))
        .route("/api/v1/users/search", get(search_users))
        .route("/api/v1/token/verify", get(verify_token))
        .route(
            "/api/v1/upload",
            post(upload_file).layer(DefaultBodyLimit::max(upload_body_limit)),
        );

    Router::new()
        .route("/health-check", get(health_check))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
