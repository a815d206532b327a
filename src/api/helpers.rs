//! Common helpers for API handlers.
//!
//! Every error leaves the service as `{ "detail": ... }` with a matching
//! status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::models::ErrorDetail;

/// Message shown to clients when the text-generation service fails.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "AI service unavailable. Please try again later.";

#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(ErrorDetail { detail: self.1 })).into_response()
    }
}

#[must_use]
pub fn service_unavailable() -> ApiError {
    ApiError(
        StatusCode::SERVICE_UNAVAILABLE,
        SERVICE_UNAVAILABLE_MESSAGE.to_string(),
    )
}

#[must_use]
pub fn unprocessable(msg: impl Into<String>) -> ApiError {
    ApiError(StatusCode::UNPROCESSABLE_ENTITY, msg.into())
}

#[must_use]
pub fn internal(msg: impl Into<String>) -> ApiError {
    ApiError(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
}

#[must_use]
pub fn payload_too_large(msg: impl Into<String>) -> ApiError {
    ApiError(StatusCode::PAYLOAD_TOO_LARGE, msg.into())
}
