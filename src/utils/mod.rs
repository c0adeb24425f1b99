//! # Utility Modules
//!
//! Constants, configuration loading, and input helpers shared by the handlers.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Fixed response values and the verification key
//! - **Config** (`config`) - Environment-driven deployment settings
//! - **Query** (`query`) - Query string parameter lookup
//! - **Upload** (`upload`) - Declared-metadata checks for file uploads

pub mod config;
pub mod constant;
pub mod query;
pub mod secret;
pub mod upload;
