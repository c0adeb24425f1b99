//! # Application Constants
//!
//! This module defines the fixed values served by the API surface: the version
//! string, the verification key, and the payload fragments of elevated responses.

/// Version reported by the status endpoint
pub const API_VERSION: &str = "1.0.0";

/// Symmetric key used to verify bearer tokens
///
/// Embedded at compile time; it is never read from configuration or rotated.
pub const VERIFICATION_KEY: &[u8] = b"weak_secret_key";

/// Diagnostic message included in the debug status payload
pub const DEBUG_INFO: &str = "Internal system information exposed";

/// Flag included in the debug status payload
pub const STATUS_FLAG: &str = "FLAG_PLACEHOLDER_4";

/// Flag included in the admin token payload
pub const ADMIN_FLAG: &str = "FLAG_PLACEHOLDER_6";

/// Internal admin token exposed by the debug status payload
pub const ADMIN_TOKEN_SECRET: &str = "admin_secret_token_1234";

/// Internal API key exposed by the debug status payload
pub const API_KEY_SECRET: &str = "api_key_super_secret";

/// Role claim value that unlocks the admin token payload
pub const ADMIN_ROLE: &str = "admin";

/// Default listen address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

/// Default size of the database connection pool
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Default request body limit for the upload endpoint (10 MiB)
pub const DEFAULT_UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;
