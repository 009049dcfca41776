use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::{UserPayload, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD API for users with soft delete"
    ),
    paths(
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::soft_delete_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // User DTOs
            UserPayload,
            UserResponse
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document as YAML for external tooling.
#[get("/static/swagger.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok()
            .content_type("application/yaml")
            .body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI document");
            ApiResponse::internal_error(&e.to_string())
        }
    }
}
