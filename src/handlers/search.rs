//! # User Search Handler
//!
//! Builds a username lookup by pasting the caller's query text into SQL and
//! runs it against the record store. Nothing in the text is escaped or bound
//! as a parameter, and the response never reflects the lookup outcome.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::models::AppState;
use crate::utils::query::{QueryPairs, first_param};

/// Body of the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub message: &'static str,
}

impl SearchReport {
    pub fn completed() -> Self {
        Self {
            message: "Search completed",
        }
    }
}

/// Builds the substring lookup for `query` by plain interpolation.
pub fn username_lookup(query: &str) -> String {
    format!("SELECT * FROM users WHERE username LIKE '%{query}%'")
}

/// Searches users by username substring.
///
/// GET /api/v1/users/search?q=...
///
/// # Returns
///
/// Always `200 OK` with `{message: "Search completed"}`. Lookup failures are
/// logged and discarded.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn search_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Json<SearchReport> {
    let query = first_param(&params, "q").unwrap_or_default();
    let statement = username_lookup(query);
    debug!(%statement, "Running username lookup");

    if let Err(e) = state.record_store.execute_lookup(&statement).await {
        warn!(error = %e, "Username lookup failed, result discarded");
    }

    Json(SearchReport::completed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_interpolated_verbatim() {
        assert_eq!(
            username_lookup("alice"),
            "SELECT * FROM users WHERE username LIKE '%alice%'"
        );
        assert_eq!(
            username_lookup("' OR '1'='1"),
            "SELECT * FROM users WHERE username LIKE '%' OR '1'='1%'"
        );
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(
            username_lookup(""),
            "SELECT * FROM users WHERE username LIKE '%%'"
        );
    }
}
