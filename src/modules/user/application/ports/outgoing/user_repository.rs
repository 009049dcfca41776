use async_trait::async_trait;

use crate::user::application::domain::entities::User;

// Input DTO for inserting a user; the store assigns the id and status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserData {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserData {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username {0} already exists")]
    UsernameTaken(String),

    #[error("Email {0} already exists")]
    EmailTaken(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the user store. Each call is its own commit-or-rollback unit.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts an active user. Active-row uniqueness violations surface as
    /// `UsernameTaken` / `EmailTaken`.
    async fn insert(&self, data: NewUserData) -> Result<User, UserRepositoryError>;

    /// Overwrites username and email of an active user.
    async fn update(&self, user_id: i32, data: UpdateUserData)
        -> Result<User, UserRepositoryError>;

    /// Marks a user inactive whatever its current status.
    async fn set_inactive(&self, user_id: i32) -> Result<(), UserRepositoryError>;
}
