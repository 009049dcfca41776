use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::SoftDeleteUserError;
use crate::AppState;

/// Soft-delete a user
///
/// Marks the user inactive. The record is kept and deleting it again succeeds.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User marked inactive"),
        (status = 404, description = "No user with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/{user_id}")]
pub async fn soft_delete_user_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.users.soft_delete.execute(user_id).await {
        Ok(()) => {
            info!(user_id, "User soft-deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_soft_delete_user_error(user_id, err),
    }
}

fn map_soft_delete_user_error(user_id: i32, err: SoftDeleteUserError) -> HttpResponse {
    match err {
        SoftDeleteUserError::UserNotFound => {
            warn!(user_id, "User not found");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        SoftDeleteUserError::Persistence(msg) => {
            error!(user_id, error = %msg, "Failed to soft-delete user");
            ApiResponse::internal_error(&msg)
        }
    }
}
