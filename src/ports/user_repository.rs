//! User repository port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository port for User aggregate persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Update an existing user, rejecting stale versions with `Conflict`.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by their ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
