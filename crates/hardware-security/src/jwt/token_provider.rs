//! JWT token provider for creating and validating access tokens.

use super::Claims;
use chrono::{Duration, Utc};
use hardware_config::SecurityConfig;
use hardware_core::{HardwareError, HardwareResult, User};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

/// A freshly issued access token.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Encoded JWT.
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Token type (always "Bearer").
    pub token_type: &'static str,
}

/// HS256 token provider signed with the configured secret key.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expires_in_secs: u64,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: &SecurityConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.token_issuer]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            issuer: config.token_issuer.clone(),
            expires_in_secs: config.access_token_expiration_secs,
            validation,
        }
    }

    /// Issues an access token for a user.
    pub fn generate_access_token(&self, user: &User) -> HardwareResult<AccessToken> {
        let expires_at = i64::try_from(self.expires_in_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| HardwareError::Configuration("Token lifetime out of range".to_string()))?;
        let claims = Claims::for_user(user, self.issuer.clone(), expires_at);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| HardwareError::Internal(format!("Failed to generate access token: {}", e)))?;

        debug!("Generated access token for user {}", user.id);
        Ok(AccessToken {
            token,
            expires_in: self.expires_in_secs,
            token_type: "Bearer",
        })
    }

    /// Validates a token and returns its claims.
    pub fn validate_access_token(&self, token: &str) -> HardwareResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!("Token validation failed: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => HardwareError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                    HardwareError::InvalidToken("Invalid token signature".to_string())
                }
                ErrorKind::InvalidIssuer => HardwareError::InvalidToken("Invalid token issuer".to_string()),
                ErrorKind::ImmatureSignature => HardwareError::InvalidToken("Token not yet valid".to_string()),
                _ => HardwareError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.issuer)
            .field("expires_in_secs", &self.expires_in_secs)
            .finish_non_exhaustive()
    }
}
