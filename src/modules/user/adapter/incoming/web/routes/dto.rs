use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::user::application::domain::{entities::User, validation::UserInput};

/// Request body for creating or updating a user.
///
/// Fields are kept as raw JSON values so that a missing field and a
/// non-string field can be told apart during validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    /// Username, at most 80 characters
    #[schema(value_type = String, required = true, example = "alice")]
    pub username: Option<Value>,

    /// Email address, at most 120 characters
    #[schema(value_type = String, required = true, example = "alice@example.com")]
    pub email: Option<Value>,
}

impl From<UserPayload> for UserInput {
    fn from(payload: UserPayload) -> Self {
        UserInput::new(payload.username, payload.email)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    /// False once the user has been soft-deleted
    #[schema(example = true)]
    pub status: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            status: user.status,
        }
    }
}
