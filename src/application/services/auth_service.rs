//! Authentication service for the static API bearer token.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC key used to derive comparable digests from tokens.
const TOKEN_MAC_KEY: &[u8] = b"bookstore-api/bearer-token";

/// Checks bearer tokens against the configured `API_SECRET`.
///
/// The secret is kept only as an HMAC-SHA256 digest and candidate tokens are
/// compared with [`Mac::verify_slice`], which runs in constant time.
pub struct AuthService {
    expected_mac: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for the given secret.
    pub fn new(api_secret: &str) -> Self {
        Self {
            expected_mac: Self::mac_for(api_secret).finalize().into_bytes().to_vec(),
        }
    }

    fn mac_for(token: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(TOKEN_MAC_KEY).expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        mac
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match the secret.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        Self::mac_for(token)
            .verify_slice(&self.expected_mac)
            .map_err(|_| {
                tracing::debug!("Rejected request with invalid bearer token");
                AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token" }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new("valid-token");

        assert!(service.authenticate("valid-token").is_ok());
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let service = AuthService::new("valid-token");

        let result = service.authenticate("invalid-token");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_rejects_prefix_and_empty() {
        let service = AuthService::new("valid-token");

        assert!(service.authenticate("valid").is_err());
        assert!(service.authenticate("").is_err());
        assert!(service.authenticate("valid-token ").is_err());
    }

    #[test]
    fn test_digest_length() {
        let service = AuthService::new("anything");

        assert_eq!(service.expected_mac.len(), 32);
    }
}
