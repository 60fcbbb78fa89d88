pub mod auth;
pub mod error;
pub mod models;
pub mod store;
pub mod traits;
pub mod users;

#[cfg(test)]
pub mod testutil;

pub use auth::AuthService;
pub use error::AppError;
pub use models::{AuthSession, Claims, Identity, NewUser, PublicUser, User, UserPatch};
pub use store::InMemoryUserStore;
pub use traits::{PasswordHasher, TokenIssuer, UserStore};
pub use users::UserService;
