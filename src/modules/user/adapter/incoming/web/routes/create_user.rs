use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::CreateUserError;
use crate::AppState;

use super::dto::{UserPayload, UserResponse};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a user
///
/// Username and email must be unique among active users.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (
            status = 201,
            description = "User created",
            body = UserResponse,
            example = json!({
                "id": 1,
                "username": "alice",
                "email": "alice@example.com",
                "status": true
            })
        ),
        (
            status = 400,
            description = "Invalid payload, failed validation or duplicate user",
            body = ErrorResponse,
            examples(
                ("Invalid JSON" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_PAYLOAD", "message": "Invalid JSON payload" }
                }))),
                ("Too long" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "String length exceeds maximum allowed length of 80 for username"
                    }
                }))),
                ("Duplicate" = (value = json!({
                    "success": false,
                    "error": { "code": "USER_ALREADY_EXISTS", "message": "Username alice already exists" }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn create_user_handler(
    payload: web::Json<UserPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.create.execute(payload.into_inner().into()).await {
        Ok(user) => {
            info!(
                user_id = user.id,
                username = %user.username,
                "User created"
            );
            ApiResponse::created(UserResponse::from(user))
        }
        Err(err) => map_create_user_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match &err {
        CreateUserError::Validation(_) => {
            warn!(error = %err, "Rejected user input");
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        CreateUserError::UsernameTaken(_) | CreateUserError::EmailTaken(_) => {
            warn!(error = %err, "Duplicate user");
            ApiResponse::bad_request("USER_ALREADY_EXISTS", &err.to_string())
        }
        CreateUserError::Persistence(msg) => {
            error!(error = %msg, "Failed to create user");
            ApiResponse::internal_error(msg)
        }
    }
}
