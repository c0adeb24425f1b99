//! # Token Verification Handler
//!
//! Verifies a bearer token passed in the query string and grants admin output
//! to any verified token whose own `role` claim says `admin`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::AppResult;
use crate::models::AppState;
use crate::services::token::Privilege;
use crate::utils::constant::ADMIN_FLAG;
use crate::utils::query::{QueryPairs, first_param};

/// Body of a successful token verification
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TokenReport {
    Admin {
        message: &'static str,
        flag: &'static str,
    },
    Valid {
        message: &'static str,
    },
}

impl From<Privilege> for TokenReport {
    fn from(privilege: Privilege) -> Self {
        match privilege {
            Privilege::Admin => TokenReport::Admin {
                message: "Admin access granted",
                flag: ADMIN_FLAG,
            },
            Privilege::Ordinary => TokenReport::Valid {
                message: "Token valid",
            },
        }
    }
}

/// Verifies the `token` query parameter.
///
/// GET /api/v1/token/verify?token=...
///
/// # Returns
///
/// - `200 OK` with `{message: "Admin access granted", flag}` - Verified, `role` is `admin`
/// - `200 OK` with `{message: "Token valid"}` - Verified, any other role
/// - `401 Unauthorized` with `{error: "Invalid token"}` - Verification failed
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn verify_token(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<TokenReport>> {
    let token = first_param(&params, "token").unwrap_or_default();

    let verified = state.token_verifier.verify(token).inspect_err(|e| {
        warn!(error = %e, "Token verification failed");
    })?;

    let subject = verified.claims().get("sub");
    let privilege = verified.privilege();
    match privilege {
        Privilege::Admin => info!(?subject, "Admin access granted from role claim"),
        Privilege::Ordinary => debug!(?subject, "Token verified without admin role"),
    }

    Ok(Json(privilege.into()))
}
