//! # Token Verification
//!
//! This module verifies HMAC-signed JSON Web Tokens and classifies the caller's
//! privilege from the token's own `role` claim.
//!
//! ## Behavior
//!
//! - HS256, HS384 and HS512 signatures are accepted
//! - No claim is required; `exp`, `nbf` and `iat` are checked only when present,
//!   with no clock leeway
//! - `aud` is never checked
//! - Privilege comes from the `role` claim alone, with no lookup against any user record

use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, errors::ErrorKind, get_current_timestamp,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::utils::constant::ADMIN_ROLE;

/// Errors that can occur during token verification
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,
    #[error("Token issued in the future")]
    IssuedInFuture,
    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
}

/// Claims embedded in a verified token
pub type ClaimSet = Map<String, Value>;

/// Privilege level asserted by a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// The token claims `role: "admin"`
    Admin,
    /// Any other verified token
    Ordinary,
}

/// A token whose signature has been checked
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    claims: ClaimSet,
}

impl VerifiedToken {
    /// All claims carried by the token.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Privilege derived from the `role` claim. Only the exact string `"admin"` is privileged.
    pub fn privilege(&self) -> Privilege {
        match self.claims.get("role") {
            Some(Value::String(role)) if role == ADMIN_ROLE => Privilege::Admin,
            _ => Privilege::Ordinary,
        }
    }
}

/// Verifies bearer tokens against a single symmetric key
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for tokens signed with `secret`.
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Checks the token signature and any time-based claims it carries.
    ///
    /// # Errors
    ///
    /// - [`TokenError::TokenExpired`] - The token has an `exp` in the past
    /// - [`TokenError::IssuedInFuture`] - The token has an `iat` later than now
    /// - [`TokenError::InvalidToken`] - Malformed token, wrong key, or unsupported algorithm
    #[instrument(skip_all, fields(token_length = token.len()))]
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        trace!("Verifying token");

        match decode::<ClaimSet>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => {
                check_issued_at(&token_data.claims)?;
                trace!(claims = token_data.claims.len(), "Token verified");
                Ok(VerifiedToken {
                    claims: token_data.claims,
                })
            }
            Err(e) if e.kind() == &ErrorKind::ExpiredSignature => {
                debug!("Token expired");
                Err(TokenError::TokenExpired)
            }
            Err(e) => {
                debug!(error = %e, "Token rejected");
                Err(TokenError::InvalidToken(e))
            }
        }
    }
}

/// Rejects a numeric `iat` that lies after the current time.
fn check_issued_at(claims: &ClaimSet) -> Result<(), TokenError> {
    let Some(issued_at) = claims.get("iat").and_then(Value::as_f64) else {
        return Ok(());
    };
    if issued_at as i64 > get_current_timestamp() as i64 {
        debug!(issued_at, "Token issued in the future");
        return Err(TokenError::IssuedInFuture);
    }
    Ok(())
}
