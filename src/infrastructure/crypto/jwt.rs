//! JWT Token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtConfig {
    /// Token lifetime in seconds, used for the cookie `Max-Age`
    pub fn expires_in_secs(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

/// JWT TokenClaims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user ID, stringified)
    pub sub: String,
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    pub fn new(user_id: i32, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: user_id.to_string(),
            user_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// Create a JWT token for a user
pub fn create_token(user_id: i32, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let token_claims = TokenClaims::new(user_id, config);

    encode(
        &Header::default(),
        &token_claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a JWT token
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
