use async_trait::async_trait;

use crate::user::application::domain::{
    entities::User,
    validation::{UserInput, ValidationError},
};

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username {0} already exists")]
    UsernameTaken(String),

    #[error("Email {0} already exists")]
    EmailTaken(String),

    #[error("{0}")]
    Persistence(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, input: UserInput) -> Result<User, CreateUserError>;
}
