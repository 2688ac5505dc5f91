//! Advisory JWT payload decoding
//!
//! Decodes the claims segment of an access token for UI gating only. No
//! signature verification happens client-side; verification is the backend's
//! responsibility and a decoded token is never treated as proof of anything
//! beyond "worth showing the dashboard for".

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decode failure for a malformed or unparseable token.
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-segment JWT")]
    MalformedStructure,

    #[error("payload segment is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not valid claims JSON: {0}")]
    InvalidClaims(#[from] serde_json::Error),
}

/// Claims the client cares about from the access token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiry as unix seconds.
    pub exp: i64,
}

impl Claims {
    /// Whether the token is expired at `now`. `exp == now` counts as expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Decode the claims from a JWT access token without verifying it.
///
/// # Errors
/// Returns [`TokenDecodeError`] if the token does not have three segments,
/// the payload segment is not URL-safe base64, or the payload JSON lacks the
/// expected claims.
pub fn decode_claims(token: &str) -> Result<Claims, TokenDecodeError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenDecodeError::MalformedStructure),
    };

    // Some issuers pad the segment; the URL-safe alphabet never contains '='.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims = serde_json::from_slice(&bytes)?;
    Ok(claims)
}

#[cfg(test)]
pub(crate) mod test_tokens {
    //! Helpers for building unsigned test tokens.
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    /// Build a structurally valid JWT with the given claims payload.
    /// The signature segment is garbage, which is fine: it is never checked.
    pub fn make_jwt(username: &str, exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD
            .encode(format!(r#"{{"username":"{username}","exp":{exp}}}"#).as_bytes());
        format!("{header}.{payload}.sig")
    }
}
