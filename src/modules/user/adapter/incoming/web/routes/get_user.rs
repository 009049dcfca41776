use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetUserError;
use crate::AppState;

use super::dto::UserResponse;

/// Get a single active user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (
            status = 404,
            description = "No active user with that id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_NOT_FOUND",
                    "message": "Could not find user with that id"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{user_id}")]
pub async fn get_user_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.users.get.execute(user_id).await {
        Ok(user) => {
            info!(user_id, "Fetched user");
            ApiResponse::ok(UserResponse::from(user))
        }
        Err(err) => map_get_user_error(user_id, err),
    }
}

fn map_get_user_error(user_id: i32, err: GetUserError) -> HttpResponse {
    match err {
        GetUserError::UserNotFound => {
            warn!(user_id, "User not found");
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        GetUserError::QueryFailed(msg) => {
            error!(user_id, error = %msg, "Failed to fetch user");
            ApiResponse::internal_error(&msg)
        }
    }
}
