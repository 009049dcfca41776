use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetUserError {
    #[error("Could not find user with that id")]
    UserNotFound,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<User, GetUserError>;
}
