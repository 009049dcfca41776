use std::sync::Arc;

use crate::user::application::{
    ports::incoming::use_cases::{
        CreateUserUseCase, GetUserUseCase, ListUsersUseCase, SoftDeleteUserUseCase,
        UpdateUserUseCase,
    },
    ports::outgoing::{UserQuery, UserRepository},
    services::{
        CreateUserService, GetUserService, ListUsersService, SoftDeleteUserService,
        UpdateUserService,
    },
};

#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
}

impl UserUseCases {
    /// Builds every user service over one query and one repository adapter.
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: UserQuery + Clone + Send + Sync + 'static,
        R: UserRepository + Clone + Send + Sync + 'static,
    {
        Self {
            list: Arc::new(ListUsersService::new(query.clone())),
            get: Arc::new(GetUserService::new(query.clone())),
            create: Arc::new(CreateUserService::new(query.clone(), repository.clone())),
            update: Arc::new(UpdateUserService::new(query.clone(), repository.clone())),
            soft_delete: Arc::new(SoftDeleteUserService::new(query, repository)),
        }
    }
}
