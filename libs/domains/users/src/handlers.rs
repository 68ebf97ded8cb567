use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{NumericPath, errors::responses::BadRequestValidationResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, MessageResponse, UpdateUser, User, UserEnvelope, UserListEnvelope};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUser, UpdateUser, UserEnvelope, UserListEnvelope, MessageResponse),
        responses(BadRequestValidationResponse)
    ),
    tags(
        (name = TAG, description = "In-memory user records")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List all users in insertion order
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = UserListEnvelope)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<UserListEnvelope>> {
    let users = service.list_users().await?;
    Ok(Json(UserListEnvelope { users }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    body: Bytes,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "User not found")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    NumericPath(id): NumericPath,
) -> UserResult<Json<UserEnvelope>> {
    let id = id.ok_or(UserError::NotFound)?;
    let user = service.get_user(id).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Update a user with a partial payload
///
/// An unknown ID answers 404 whatever the body contains.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "User not found")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    NumericPath(id): NumericPath,
    body: Bytes,
) -> UserResult<Json<UserEnvelope>> {
    let id = id.ok_or(UserError::NotFound)?;
    let user = service.update_user(id, &body).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    NumericPath(id): NumericPath,
) -> UserResult<Json<MessageResponse>> {
    let id = id.ok_or(UserError::NotFound)?;
    service.delete_user(id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
