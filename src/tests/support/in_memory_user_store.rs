use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::user::application::{
    domain::entities::User,
    ports::outgoing::{
        NewUserData, UpdateUserData, UserQuery, UserQueryError, UserRepository,
        UserRepositoryError,
    },
};

pub fn user(id: i32, username: &str, email: &str, status: bool) -> User {
    User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        status,
    }
}

#[derive(Default)]
struct StoreState {
    rows: Vec<User>,
    last_id: i32,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

impl StoreState {
    fn conflict(
        &self,
        username: &str,
        email: &str,
        except: Option<i32>,
    ) -> Option<UserRepositoryError> {
        let others = || {
            self.rows
                .iter()
                .filter(move |u| u.status && Some(u.id) != except)
        };

        if others().any(|u| u.username == username) {
            return Some(UserRepositoryError::UsernameTaken(username.to_string()));
        }
        if others().any(|u| u.email == email) {
            return Some(UserRepositoryError::EmailTaken(email.to_string()));
        }
        None
    }
}

/// Shared in-memory implementation of both user ports.
///
/// Clones share rows, so one handle can be given to the query side and
/// another to the repository side. Active-row uniqueness is enforced the
/// same way the partial unique indexes do it in Postgres.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let last_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        Self {
            state: Arc::new(Mutex::new(StoreState {
                rows: users,
                last_id,
                ..StoreState::default()
            })),
        }
    }

    /// Every following read fails with a database error.
    pub fn fail_reads(&self, message: &str) {
        self.state.lock().unwrap().read_failure = Some(message.to_string());
    }

    /// Every following write fails with a database error and persists nothing.
    pub fn fail_writes(&self, message: &str) {
        self.state.lock().unwrap().write_failure = Some(message.to_string());
    }

    /// All rows, soft-deleted ones included.
    pub fn rows(&self) -> Vec<User> {
        self.state.lock().unwrap().rows.clone()
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> Result<T, UserQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(message) = &state.read_failure {
            return Err(UserQueryError::DatabaseError(message.clone()));
        }
        Ok(f(&state))
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn list_active(&self) -> Result<Vec<User>, UserQueryError> {
        self.read(|state| {
            let mut users: Vec<User> = state.rows.iter().filter(|u| u.status).cloned().collect();
            users.sort_by_key(|u| u.id);
            users
        })
    }

    async fn find_active_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError> {
        self.read(|state| {
            state
                .rows
                .iter()
                .find(|u| u.id == user_id && u.status)
                .cloned()
        })
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError> {
        self.read(|state| state.rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.read(|state| {
            state
                .rows
                .iter()
                .find(|u| u.status && u.username == username)
                .cloned()
        })
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.read(|state| {
            state
                .rows
                .iter()
                .find(|u| u.status && u.email == email)
                .cloned()
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert(&self, data: NewUserData) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.write_failure {
            return Err(UserRepositoryError::DatabaseError(message.clone()));
        }
        if let Some(err) = state.conflict(&data.username, &data.email, None) {
            return Err(err);
        }

        state.last_id += 1;
        let created = user(state.last_id, &data.username, &data.email, true);
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.write_failure {
            return Err(UserRepositoryError::DatabaseError(message.clone()));
        }
        if let Some(err) = state.conflict(&data.username, &data.email, Some(user_id)) {
            return Err(err);
        }

        let row = state
            .rows
            .iter_mut()
            .find(|u| u.id == user_id && u.status)
            .ok_or(UserRepositoryError::UserNotFound)?;
        row.username = data.username;
        row.email = data.email;
        Ok(row.clone())
    }

    async fn set_inactive(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.write_failure {
            return Err(UserRepositoryError::DatabaseError(message.clone()));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        row.status = false;
        Ok(())
    }
}
