// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user store.
///
/// Every `*_active_*` lookup ignores soft-deleted rows; `find_by_id` does not.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn list_active(&self) -> Result<Vec<User>, UserQueryError>;

    async fn find_active_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError>;

    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, UserQueryError>;

    async fn find_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserQueryError>;

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
}
