//! Mapping of domain errors to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use fintrack_core::finance::FinanceError;
use fintrack_shared::AppError;

/// Renders an application error as `{ "error", "message" }`.
///
/// Server errors are logged with their details and answered with a generic
/// message.
pub fn app_error_response(err: &AppError) -> Response {
    if err.is_server_error() {
        error!(error = %err, "Request failed");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.public_message()
        })),
    )
        .into_response()
}

/// Maps finance errors to HTTP responses.
pub fn finance_error_response(err: FinanceError) -> Response {
    app_error_response(&AppError::from(err))
}

/// Maps an unreadable JSON body to a 400 response.
pub fn json_rejection_response(rejection: &JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "invalid_json",
            "message": rejection.body_text()
        })),
    )
        .into_response()
}

/// Maps an unreadable query string to a 400 response.
pub fn query_rejection_response(rejection: &QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "invalid_query",
            "message": rejection.body_text()
        })),
    )
        .into_response()
}
