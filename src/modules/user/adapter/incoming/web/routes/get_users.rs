use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::ListUsersError;
use crate::AppState;

use super::dto::UserResponse;

/// List active users
///
/// Returns every user that has not been soft-deleted, ordered by id.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (
            status = 200,
            description = "Active users",
            body = [UserResponse],
            example = json!([
                { "id": 1, "username": "alice", "email": "alice@example.com", "status": true }
            ])
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/api/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.users.list.execute().await {
        Ok(users) => {
            info!(count = users.len(), "Listed active users");
            let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            ApiResponse::ok(body)
        }
        Err(err) => map_list_users_error(err),
    }
}

fn map_list_users_error(err: ListUsersError) -> HttpResponse {
    match err {
        ListUsersError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to list users");
            ApiResponse::internal_error(&msg)
        }
    }
}
