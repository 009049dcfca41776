use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("Could not find user with that id")]
    UserNotFound,

    #[error("{0}")]
    Persistence(String),
}

#[async_trait]
pub trait SoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<(), SoftDeleteUserError>;
}
