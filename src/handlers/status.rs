//! # Status Handler
//!
//! Reports service status. The `debug` query flag switches to an elevated
//! payload with internal details, and that switch is not gated by any
//! authentication or authorization check.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::AppResult;
use crate::models::AppState;
use crate::utils::constant::*;
use crate::utils::query::{QueryPairs, first_param};

/// Body of the status endpoint
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusReport {
    Ok {
        status: &'static str,
        version: &'static str,
    },
    Elevated(DebugReport),
}

/// Elevated status payload
#[derive(Debug, Serialize)]
pub struct DebugReport {
    pub status: &'static str,
    pub version: &'static str,
    pub debug_info: &'static str,
    pub flag: &'static str,
    pub users: i64,
    pub secrets: InternalSecrets,
}

#[derive(Debug, Serialize)]
pub struct InternalSecrets {
    pub admin_token: &'static str,
    pub api_key: &'static str,
}

impl StatusReport {
    pub fn ok() -> Self {
        StatusReport::Ok {
            status: "ok",
            version: API_VERSION,
        }
    }

    pub fn debug(users: i64) -> Self {
        StatusReport::Elevated(DebugReport {
            status: "ok",
            version: API_VERSION,
            debug_info: DEBUG_INFO,
            flag: STATUS_FLAG,
            users,
            secrets: InternalSecrets {
                admin_token: ADMIN_TOKEN_SECRET,
                api_key: API_KEY_SECRET,
            },
        })
    }
}

/// Returns true when the caller asked for the debug payload.
///
/// Only the exact value `true` counts; anything else, including a missing flag, is false.
pub fn debug_requested(params: &[(String, String)]) -> bool {
    first_param(params, "debug") == Some("true")
}

/// Returns the service status.
///
/// GET /api/v1/status?debug=true
///
/// # Returns
///
/// - `200 OK` with `{status, version}` - Normal response
/// - `200 OK` with the [`DebugReport`] fields - When `debug=true`
/// - `500 Internal Server Error` - The record count query failed (debug only)
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn system_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<StatusReport>> {
    if !debug_requested(&params) {
        debug!("Serving normal status");
        return Ok(Json(StatusReport::ok()));
    }

    warn!("Debug status requested, exposing internal details");
    let users = state.record_store.count_users().await?;
    Ok(Json(StatusReport::debug(users)))
}
