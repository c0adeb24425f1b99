use std::sync::Arc;

use tracing::info;

use crate::services::{store::RecordStore, token::TokenVerifier};

/// Application state shared across requests. Immutable after construction.
pub struct AppState {
    /// External store answering the record count and username lookup.
    pub record_store: Arc<dyn RecordStore>,
    /// Verifier for bearer tokens presented to the token endpoint.
    pub token_verifier: TokenVerifier,
}

impl AppState {
    /// Creates the shared state from its injected collaborators.
    ///
    /// # Arguments
    ///
    /// * `record_store` - Store used by the status and search handlers
    /// * `token_verifier` - Verifier used by the token handler
    pub fn new(record_store: Arc<dyn RecordStore>, token_verifier: TokenVerifier) -> Self {
        info!("Initializing application state");
        Self {
            record_store,
            token_verifier,
        }
    }
}
