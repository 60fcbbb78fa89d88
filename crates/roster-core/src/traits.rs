use std::future::Future;

use crate::error::AppError;
use crate::models::{Claims, NewUser, User, UserPatch};

/// Owned collection of user records.
///
/// Ids are assigned by the store, sequentially from 1, and never reused.
/// Each call is atomic on its own; callers that need check-then-act must
/// accept that another request may interleave between two calls.
pub trait UserStore: Send + Sync + Clone {
    /// All records in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<User>, AppError>> + Send;

    fn get(&self, id: u64) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    /// First record with this email that can log in (has a password hash).
    ///
    /// CRUD edits may give a hashless record the same email as a registered
    /// one; this lookup skips those so they cannot shadow the real account.
    fn find_credentials(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    /// Append a record with the next id and return it.
    fn insert(&self, user: NewUser) -> impl Future<Output = Result<User, AppError>> + Send;

    /// Apply a patch. Returns `None` if no record has that id.
    fn update(
        &self,
        id: u64,
        patch: UserPatch,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    /// Remove a record. Returns whether anything was removed.
    fn delete(&self, id: u64) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// One-way password hashing with verification.
pub trait PasswordHasher: Send + Sync + Clone {
    fn hash(&self, password: &str) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Returns `Ok(false)` for a wrong password; `Err` only when the stored hash is unusable.
    fn verify(
        &self,
        password: &str,
        hash: &str,
    ) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// Issues and verifies signed, time-limited tokens.
pub trait TokenIssuer: Send + Sync + Clone {
    fn issue(&self, user_id: u64) -> Result<String, AppError>;

    /// Fails with `AppError::Unauthorized` on bad signature, expiry, or garbage input.
    fn verify(&self, token: &str) -> Result<Claims, AppError>;
}
