use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use roster_core::{AppError, Claims, TokenIssuer};

/// Longest token lifetime accepted anywhere: ten years.
pub const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// HS256 token issuer/verifier.
///
/// Tokens are stateless: validity is decided by signature and `exp` alone.
#[derive(Clone)]
pub struct JwtIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew grace.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, user_id: u64) -> Result<String, AppError> {
        let now = Utc::now();
        let expires = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::Token(format!("Token lifetime {} is out of range", self.ttl))
        })?;
        let claims = Claims {
            user_id,
            iat: now.timestamp().max(0) as u64,
            exp: expires.timestamp().max(0) as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Token(format!("Failed to sign token: {e}")))
    }

    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::Unauthorized(format!("Invalid token: {e}"))
            })
    }
}
