pub mod handlers;
pub mod responses;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned by the fallback handler and by domain errors that need more than
/// a one-line message:
/// - `error`: Machine-readable error identifier (e.g., "BadRequest")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., field violations)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": [{ "field": "email", "message": "Invalid email format" }]
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
