use async_trait::async_trait;

use crate::user::application::domain::{
    entities::User,
    validation::{UserInput, ValidationError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("Could not find user with that id")]
    UserNotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username {0} already exists")]
    UsernameTaken(String),

    #[error("Email {0} already exists")]
    EmailTaken(String),

    #[error("{0}")]
    Persistence(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32, input: UserInput) -> Result<User, UpdateUserError>;
}
