use async_trait::async_trait;

use crate::user::application::{
    domain::{entities::User, validation::UserInput},
    ports::incoming::use_cases::{UpdateUserError, UpdateUserUseCase},
    ports::outgoing::{UpdateUserData, UserQuery, UserRepository, UserRepositoryError},
};

pub struct UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    fn persistence(e: impl ToString) -> UpdateUserError {
        UpdateUserError::Persistence(e.to_string())
    }
}

#[async_trait]
impl<Q, R> UpdateUserUseCase for UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i32, input: UserInput) -> Result<User, UpdateUserError> {
        // Not-found wins over a bad payload
        self.query
            .find_active_by_id(user_id)
            .await
            .map_err(Self::persistence)?
            .ok_or(UpdateUserError::UserNotFound)?;

        let fields = input.validate()?;

        let username_owner = self
            .query
            .find_active_by_username(&fields.username)
            .await
            .map_err(Self::persistence)?;
        if username_owner.is_some_and(|other| other.id != user_id) {
            return Err(UpdateUserError::UsernameTaken(fields.username));
        }

        let email_owner = self
            .query
            .find_active_by_email(&fields.email)
            .await
            .map_err(Self::persistence)?;
        if email_owner.is_some_and(|other| other.id != user_id) {
            return Err(UpdateUserError::EmailTaken(fields.email));
        }

        let data = UpdateUserData {
            username: fields.username,
            email: fields.email,
        };

        self.repository
            .update(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                UserRepositoryError::UsernameTaken(name) => UpdateUserError::UsernameTaken(name),
                UserRepositoryError::EmailTaken(email) => UpdateUserError::EmailTaken(email),
                other => Self::persistence(other),
            })
    }
}
