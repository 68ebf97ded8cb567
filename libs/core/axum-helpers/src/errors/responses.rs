//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// Standard error messages for consistent API responses
pub mod messages {
    pub const VALIDATION_FAILED: &str = "Request validation failed";
    pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": [
            { "field": "email", "message": "Invalid email format" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);
