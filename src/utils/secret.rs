use std::{env, fs};

use tracing::{error, trace};

/// Reads a secret either from the file named by `file_env_var_name` or,
/// when that variable is unset, directly from `env_var_name`.
///
/// File contents are trimmed, so a trailing newline in a mounted secret is harmless.
pub fn get_secret(file_env_var_name: &str, env_var_name: &str) -> Option<String> {
    match env::var(file_env_var_name) {
        Ok(secret_file_path) => match fs::read_to_string(&secret_file_path) {
            Ok(content) => {
                trace!(%secret_file_path, "Loaded secret from file");
                Some(content.trim().to_string())
            }
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                None
            }
        },
        Err(_) => env::var(env_var_name).ok(),
    }
}
