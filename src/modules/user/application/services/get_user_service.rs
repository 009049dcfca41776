use async_trait::async_trait;

use crate::user::application::{
    domain::entities::User,
    ports::incoming::use_cases::{GetUserError, GetUserUseCase},
    ports::outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<User, GetUserError> {
        self.query
            .find_active_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryFailed(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }
}
