use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{NewUser, User, UserPatch};
use crate::traits::UserStore;

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

/// Process-lifetime user store backed by a `Vec`.
///
/// Cloning is cheap and every clone sees the same records.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get(&self, id: u64) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.email == email && u.password_hash.is_some())
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;
        let record = User {
            id: inner.next_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        inner.next_id += 1;
        inner.users.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: u64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.iter_mut().find(|u| u.id == id).map(|user| {
            patch.apply(user);
            user.clone()
        }))
    }

    async fn delete(&self, id: u64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok(inner.users.len() != before)
    }
}
