// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig};
use tracing::warn;

/// Any body that does not deserialize into the request DTO is rejected the same way.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "Rejected request payload");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_PAYLOAD", "Invalid JSON payload"),
        )
        .into()
    })
}

/// A path id that is not an integer cannot name a user.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found("USER_NOT_FOUND", "Could not find user with that id"),
        )
        .into()
    })
}
