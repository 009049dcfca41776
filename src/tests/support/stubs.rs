use async_trait::async_trait;

use crate::user::application::domain::{entities::User, validation::UserInput};
use crate::user::application::ports::incoming::use_cases::{
    CreateUserError, CreateUserUseCase, GetUserError, GetUserUseCase, ListUsersError,
    ListUsersUseCase, SoftDeleteUserError, SoftDeleteUserUseCase, UpdateUserError,
    UpdateUserUseCase,
};

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<User, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: UserInput) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _user_id: i32, _input: UserInput) -> Result<User, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl SoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<(), SoftDeleteUserError> {
        unimplemented!("Not used in this test")
    }
}
