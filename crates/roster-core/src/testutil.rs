//! Test utilities: cheap stand-ins for the crypto collaborators.
//!
//! Real Argon2 hashing is slow in debug builds and real JWTs are
//! non-deterministic, so service tests use these instead.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::Claims;
use crate::traits::{PasswordHasher, TokenIssuer};

// ---------------------------------------------------------------------------
// PlainHasher
// ---------------------------------------------------------------------------

/// "Hashes" by prefixing. Never use outside tests.
#[derive(Clone, Default)]
pub struct PlainHasher;

impl PlainHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        match hash.strip_prefix("hashed:") {
            Some(stored) => Ok(stored == password),
            None => Err(AppError::Hashing(format!("unrecognised hash: {hash}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// MockTokenIssuer
// ---------------------------------------------------------------------------

/// Issues `token-for-<id>` and accepts only tokens it has issued.
#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    issued: Arc<Mutex<Vec<u64>>>,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// User ids tokens were issued for, in order.
    pub fn issued(&self) -> Vec<u64> {
        self.issued.lock().unwrap().clone()
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user_id: u64) -> Result<String, AppError> {
        self.issued.lock().unwrap().push(user_id);
        Ok(format!("token-for-{user_id}"))
    }

    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let user_id = token
            .strip_prefix("token-for-")
            .and_then(|id| id.parse::<u64>().ok())
            .filter(|id| self.issued.lock().unwrap().contains(id))
            .ok_or_else(|| AppError::Unauthorized("invalid token".into()))?;
        Ok(Claims {
            user_id,
            iat: 0,
            exp: u64::MAX,
        })
    }
}
