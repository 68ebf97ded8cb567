use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;
use super::responses::messages;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("NotFound", messages::NOT_FOUND_ROUTE));

    (StatusCode::NOT_FOUND, body).into_response()
}
