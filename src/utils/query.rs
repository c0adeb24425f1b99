//! # Query String Helpers
//!
//! Handlers extract the raw query string as ordered key/value pairs instead of a
//! typed struct, so repeated or unexpected keys never cause a rejection. Lookups
//! return the first occurrence of a key.

/// Decoded query string pairs in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Returns the value of the first parameter named `key`, if any.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
