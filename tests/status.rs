mod common;

use std::sync::Arc;

use common::{MockRecordStore, spawn_app};
use serde_json::{Value, json};

async fn get_status(address: &str, query: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::Client::new()
        .get(format!("{address}/api/v1/status{query}"))
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status();
    (status, response.json().await.expect("Body should be JSON"))
}

#[tokio::test]
async fn status_without_debug_is_minimal() {
    let address = spawn_app(Arc::new(MockRecordStore::new(7))).await;

    for query in ["", "?debug=false", "?debug=1", "?debug=TRUE", "?debug=", "?verbose=true"] {
        let (status, body) = get_status(&address, query).await;
        assert_eq!(status, reqwest::StatusCode::OK, "{query}");
        assert_eq!(body, json!({"status": "ok", "version": "1.0.0"}), "{query}");
    }
}

#[tokio::test]
async fn status_with_debug_exposes_internal_details() {
    let address = spawn_app(Arc::new(MockRecordStore::new(42))).await;

    let (status, body) = get_status(&address, "?debug=true").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "version": "1.0.0",
            "debug_info": "Internal system information exposed",
            "flag": "FLAG_PLACEHOLDER_4",
            "users": 42,
            "secrets": {
                "admin_token": "admin_secret_token_1234",
                "api_key": "api_key_super_secret",
            },
        })
    );
}

#[tokio::test]
async fn debug_branch_ignores_credentials_and_other_params() {
    let address = spawn_app(Arc::new(MockRecordStore::new(3))).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/v1/status?debug=true&user=anonymous"))
        .header("Authorization", "Bearer garbage")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["flag"], "FLAG_PLACEHOLDER_4");
    assert_eq!(body["users"], 3);
}

#[tokio::test]
async fn first_debug_value_wins() {
    let address = spawn_app(Arc::new(MockRecordStore::new(1))).await;

    let (_, body) = get_status(&address, "?debug=false&debug=true").await;
    assert_eq!(body, json!({"status": "ok", "version": "1.0.0"}));

    let (_, body) = get_status(&address, "?debug=true&debug=false").await;
    assert_eq!(body["debug_info"], "Internal system information exposed");
}

#[tokio::test]
async fn debug_status_fails_when_store_is_down() {
    let address = spawn_app(Arc::new(MockRecordStore::unavailable())).await;

    let (status, body) = get_status(&address, "?debug=true").await;
    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));

    // The normal branch never touches the store
    let (status, _) = get_status(&address, "").await;
    assert_eq!(status, reqwest::StatusCode::OK);
}

#[tokio::test]
async fn repeated_requests_give_identical_responses() {
    let address = spawn_app(Arc::new(MockRecordStore::new(5))).await;

    let first = get_status(&address, "?debug=true").await;
    let second = get_status(&address, "?debug=true").await;
    assert_eq!(first, second);
}
