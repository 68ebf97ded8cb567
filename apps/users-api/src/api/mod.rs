use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod users;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
}

/// Compose every API route
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/users", users::router(state))
}

/// Plain-text greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
pub async fn root() -> &'static str {
    "Hello from Hono!"
}

/// Liveness probe for clients
#[utoipa::path(
    get,
    path = "/ping",
    tag = "meta",
    responses((status = 200, description = "Pong", body = PingResponse))
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
