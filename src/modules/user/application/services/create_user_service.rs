use async_trait::async_trait;

use crate::user::application::{
    domain::{entities::User, validation::UserInput},
    ports::incoming::use_cases::{CreateUserError, CreateUserUseCase},
    ports::outgoing::{NewUserData, UserQuery, UserRepository, UserRepositoryError},
};

pub struct CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: UserInput) -> Result<User, CreateUserError> {
        let fields = input.validate()?;

        // Fast path. The partial unique indexes still guard concurrent inserts.
        if self
            .query
            .find_active_by_username(&fields.username)
            .await
            .map_err(|e| CreateUserError::Persistence(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::UsernameTaken(fields.username));
        }

        if self
            .query
            .find_active_by_email(&fields.email)
            .await
            .map_err(|e| CreateUserError::Persistence(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::EmailTaken(fields.email));
        }

        let data = NewUserData {
            username: fields.username,
            email: fields.email,
        };

        self.repository.insert(data).await.map_err(|e| match e {
            UserRepositoryError::UsernameTaken(name) => CreateUserError::UsernameTaken(name),
            UserRepositoryError::EmailTaken(email) => CreateUserError::EmailTaken(email),
            other => CreateUserError::Persistence(other.to_string()),
        })
    }
}
