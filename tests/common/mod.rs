#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use intranet_api::services::store::{RecordStore, StoreError};
use intranet_api::utils::constant::DEFAULT_UPLOAD_BODY_LIMIT;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Tests wrapped in `test_log::test` may have installed a subscriber already.
        let _ = tracing_subscriber::fmt()
            .with_env_filter("intranet_api=debug")
            .with_test_writer()
            .try_init();
    });
}

/// A fake record store that records every lookup statement it receives.
#[derive(Debug, Default)]
pub struct MockRecordStore {
    user_count: i64,
    unavailable: bool,
    statements: Mutex<Vec<String>>,
}

impl MockRecordStore {
    pub fn new(user_count: i64) -> Self {
        Self {
            user_count,
            ..Default::default()
        }
    }

    /// A store whose every query fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Get all executed lookup statements
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    /// Get the last executed lookup statement
    pub fn last_statement(&self) -> Option<String> {
        self.statements.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn count_users(&self) -> Result<i64, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("mock store is down".into()));
        }
        Ok(self.user_count)
    }

    async fn execute_lookup(&self, statement: &str) -> Result<(), StoreError> {
        self.statements.lock().unwrap().push(statement.to_string());
        if self.unavailable {
            return Err(StoreError::Unavailable("mock store is down".into()));
        }
        Ok(())
    }
}

/// Spawns the application on a random port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(store: Arc<MockRecordStore>) -> String {
    spawn_app_with_limit(store, DEFAULT_UPLOAD_BODY_LIMIT).await
}

/// Same as [`spawn_app`] with a custom upload body limit.
pub async fn spawn_app_with_limit(store: Arc<MockRecordStore>, upload_body_limit: usize) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = intranet_api::app_with_store(store, upload_body_limit);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    address
}
