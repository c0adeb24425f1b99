//! # Services
//!
//! Collaborators injected into the handlers through [`crate::models::AppState`].
//!
//! ## Available Services
//!
//! - **Store** (`store`) - Read-only queries against the external user directory
//! - **Token** (`token`) - Bearer token verification and privilege classification

pub mod store;
pub mod token;
