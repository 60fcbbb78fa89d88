use crate::error::AppError;
use crate::models::{NewUser, PublicUser, UserPatch};
use crate::traits::UserStore;

/// CRUD over the user store. Everything it returns is a public projection.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = self.store.list().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    pub async fn get(&self, id: u64) -> Result<PublicUser, AppError> {
        self.store
            .get(id)
            .await?
            .map(PublicUser::from)
            .ok_or(AppError::NotFound(id))
    }

    /// Records created here have no password and cannot log in.
    pub async fn create(&self, name: String, email: String) -> Result<PublicUser, AppError> {
        let user = self
            .store
            .insert(NewUser {
                name,
                email,
                password_hash: None,
            })
            .await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<PublicUser, AppError> {
        let user = self
            .store
            .update(id, patch)
            .await?
            .ok_or(AppError::NotFound(id))?;
        tracing::info!(user_id = id, "User updated");
        Ok(user.into())
    }

    /// Idempotent: deleting an id that does not exist still succeeds.
    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        if self.store.delete(id).await? {
            tracing::info!(user_id = id, "User deleted");
        } else {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }
}
