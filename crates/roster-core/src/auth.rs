use crate::error::AppError;
use crate::models::{AuthSession, NewUser, PublicUser, User};
use crate::traits::{PasswordHasher, TokenIssuer, UserStore};

/// Login and registration on top of a [`UserStore`].
///
/// Generic over the store and both crypto collaborators so tests can swap
/// in cheap fakes.
pub struct AuthService<S, H, T>
where
    S: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    store: S,
    hasher: H,
    tokens: T,
}

impl<S, H, T> AuthService<S, H, T>
where
    S: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(store: S, hasher: H, tokens: T) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Verify credentials and issue a token.
    ///
    /// An unknown email, a record without a password hash, and a wrong
    /// password all produce the same [`AppError::InvalidCredentials`].
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthSession, AppError> {
        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(AppError::BadRequest(
                "email and password are required".into(),
            ));
        };

        let Some(user) = self.store.find_credentials(email).await? else {
            tracing::warn!("Login rejected: no account with a password for this email");
            return Err(AppError::InvalidCredentials);
        };

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AppError::InvalidCredentials);
        };

        if !self.hasher.verify(password, hash).await? {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.session_for(&user)
    }

    /// Create a login-capable record and issue a token for it.
    pub async fn register(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthSession, AppError> {
        let (Some(name), Some(email), Some(password)) =
            (present(name), present(email), present(password))
        else {
            return Err(AppError::BadRequest(
                "name, email and password are required".into(),
            ));
        };

        // Pre-check only: a concurrent registration can slip in before the insert.
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }

        let password_hash = self.hasher.hash(password).await?;
        let user = self
            .store
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        self.session_for(&user)
    }

    /// Public view of the user a verified token belongs to.
    pub async fn current_user(&self, user_id: u64) -> Result<PublicUser, AppError> {
        self.store
            .get(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or(AppError::NotFound(user_id))
    }

    /// Insert the admin record unless its email is already taken.
    ///
    /// Returns the admin's id either way.
    pub async fn seed_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<u64, AppError> {
        if let Some(existing) = self.store.find_by_email(email).await? {
            return Ok(existing.id);
        }

        let password_hash = self.hasher.hash(password).await?;
        let admin = self
            .store
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!(user_id = admin.id, "Seeded admin account");
        Ok(admin.id)
    }

    fn session_for(&self, user: &User) -> Result<AuthSession, AppError> {
        Ok(AuthSession {
            token: self.tokens.issue(user.id)?,
            user: user.public(),
        })
    }
}

/// Treat an empty string the same as a missing field.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}
