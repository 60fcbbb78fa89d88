use thiserror::Error;

/// Application-wide error types for Roster.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request field is missing or empty.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Login failed. Deliberately does not say whether the email or the password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, expired, or forged bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No user record with the given id.
    #[error("User not found: {0}")]
    NotFound(u64),

    /// Registration attempted with an email that is already taken.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Password hashing or verification failed inside the hasher.
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Token signing failed.
    #[error("Token error: {0}")]
    Token(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if the error was caused by the client rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::BadRequest(_)
                | AppError::InvalidCredentials
                | AppError::Unauthorized(_)
                | AppError::NotFound(_)
                | AppError::DuplicateEmail(_)
        )
    }
}
