use std::sync::Arc;

use chrono::Duration;

use roster_auth::{Argon2Hasher, JwtIssuer};
use roster_core::{AppError, AuthService, InMemoryUserStore, UserService};

use crate::config::ServerConfig;

pub type AppAuthService = AuthService<InMemoryUserStore, Argon2Hasher, JwtIssuer>;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub auth: AppAuthService,
    pub users: UserService<InMemoryUserStore>,
    pub store: InMemoryUserStore,
}

impl AppState {
    /// Wire both services onto one fresh store and seed the admin account.
    pub async fn bootstrap(
        config: &ServerConfig,
        hasher: Argon2Hasher,
    ) -> Result<Arc<Self>, AppError> {
        let store = InMemoryUserStore::new();
        let tokens = JwtIssuer::new(&config.jwt_secret, Duration::seconds(config.jwt_expires_in));

        let auth = AuthService::new(store.clone(), hasher, tokens);
        auth.seed_admin(
            &config.admin_name,
            &config.admin_email,
            &config.admin_password,
        )
        .await?;

        Ok(Arc::new(Self {
            auth,
            users: UserService::new(store.clone()),
            store,
        }))
    }
}
