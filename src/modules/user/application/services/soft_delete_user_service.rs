use async_trait::async_trait;

use crate::user::application::{
    ports::incoming::use_cases::{SoftDeleteUserError, SoftDeleteUserUseCase},
    ports::outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

pub struct SoftDeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> SoftDeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SoftDeleteUserUseCase for SoftDeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    /// Deleting an already inactive user succeeds again.
    async fn execute(&self, user_id: i32) -> Result<(), SoftDeleteUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| SoftDeleteUserError::Persistence(e.to_string()))?
            .ok_or(SoftDeleteUserError::UserNotFound)?;

        self.repository
            .set_inactive(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SoftDeleteUserError::UserNotFound,
                other => SoftDeleteUserError::Persistence(other.to_string()),
            })
    }
}
