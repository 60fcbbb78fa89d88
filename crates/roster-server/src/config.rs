use roster_auth::MAX_TOKEN_TTL_SECS;
use roster_core::AppError;

/// Signing secret used when `JWT_SECRET` is unset. Only fit for local demos.
pub const INSECURE_DEFAULT_SECRET: &str = "roster-insecure-demo-secret";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expires_in: i64,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `ROSTER_PORT` (optional, defaults to 3000)
    /// - `JWT_SECRET` (optional, falls back to [`INSECURE_DEFAULT_SECRET`])
    /// - `JWT_EXPIRES_IN_SECS` (optional, defaults to 3600)
    /// - `ROSTER_ADMIN_NAME` / `ROSTER_ADMIN_EMAIL` / `ROSTER_ADMIN_PASSWORD`
    ///   (optional, seed account; default `Admin` / `admin@example.com` / `admin123`)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("ROSTER_PORT") {
            None => 3000,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid ROSTER_PORT '{raw}': must be a port number"
                ))
            })?,
        };

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => INSECURE_DEFAULT_SECRET.to_string(),
        };

        let jwt_expires_in = match lookup("JWT_EXPIRES_IN_SECS") {
            None => 3600,
            Some(raw) => {
                let parsed: i64 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid JWT_EXPIRES_IN_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed <= 0 {
                    return Err(AppError::ConfigError(
                        "JWT_EXPIRES_IN_SECS must be at least 1".into(),
                    ));
                }
                if parsed > MAX_TOKEN_TTL_SECS {
                    return Err(AppError::ConfigError(format!(
                        "JWT_EXPIRES_IN_SECS must be at most {MAX_TOKEN_TTL_SECS} (ten years)"
                    )));
                }
                parsed
            }
        };

        Ok(Self {
            port,
            jwt_secret,
            jwt_expires_in,
            admin_name: lookup("ROSTER_ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
            admin_email: lookup("ROSTER_ADMIN_EMAIL")
                .unwrap_or_else(|| "admin@example.com".to_string()),
            admin_password: lookup("ROSTER_ADMIN_PASSWORD")
                .unwrap_or_else(|| "admin123".to_string()),
        })
    }

    pub fn uses_insecure_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_SECRET
    }
}
