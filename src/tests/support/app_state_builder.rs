use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, GetUserUseCase, ListUsersUseCase, SoftDeleteUserUseCase,
    UpdateUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    users: UserUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            users: UserUseCases {
                list: Arc::new(StubListUsersUseCase),
                get: Arc::new(StubGetUserUseCase),
                create: Arc::new(StubCreateUserUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                soft_delete: Arc::new(StubSoftDeleteUserUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.users.list = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.users.get = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.create = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.users.update = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: impl SoftDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.users.soft_delete = Arc::new(uc);
        self
    }

    /// Replaces every user use case at once, e.g. with real services.
    pub fn with_user_use_cases(mut self, users: UserUseCases) -> Self {
        self.users = users;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { users: self.users })
    }
}
