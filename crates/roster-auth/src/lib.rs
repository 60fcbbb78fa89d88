//! Concrete crypto collaborators for Roster's auth service.
//!
//! - [`Argon2Hasher`]: Argon2id password hashing in PHC string format
//! - [`JwtIssuer`]: HS256-signed, time-limited tokens carrying a user id

pub mod hasher;
pub mod jwt;

pub use hasher::Argon2Hasher;
pub use jwt::{JwtIssuer, MAX_TOKEN_TTL_SECS};
