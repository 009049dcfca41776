use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::UpdateUserError;
use crate::AppState;

use super::dto::{UserPayload, UserResponse};

/// Update a user
///
/// Replaces username and email of an active user. Status is left untouched.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid payload, failed validation or duplicate user", body = ErrorResponse),
        (status = 404, description = "No active user with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/{user_id}")]
pub async fn update_user_handler(
    path: web::Path<i32>,
    payload: web::Json<UserPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .users
        .update
        .execute(user_id, payload.into_inner().into())
        .await
    {
        Ok(user) => {
            info!(user_id, username = %user.username, "User updated");
            ApiResponse::ok(UserResponse::from(user))
        }
        Err(err) => map_update_user_error(user_id, err),
    }
}

fn map_update_user_error(user_id: i32, err: UpdateUserError) -> HttpResponse {
    match &err {
        UpdateUserError::UserNotFound => {
            warn!(user_id, "User not found");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        UpdateUserError::Validation(_) => {
            warn!(user_id, error = %err, "Rejected user input");
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        UpdateUserError::UsernameTaken(_) | UpdateUserError::EmailTaken(_) => {
            warn!(user_id, error = %err, "Duplicate user");
            ApiResponse::bad_request("USER_ALREADY_EXISTS", &err.to_string())
        }
        UpdateUserError::Persistence(msg) => {
            error!(user_id, error = %msg, "Failed to update user");
            ApiResponse::internal_error(msg)
        }
    }
}
