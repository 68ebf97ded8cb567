//! Users API service: wires the users domain, health route and shared
//! middleware into one router.

use axum::Router;
use axum_helpers::{create_router, health_router};

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the complete application router for `state`.
///
/// # Errors
/// Fails only if the CORS configuration in the environment is invalid.
pub fn build_app(state: &AppState) -> std::io::Result<Router> {
    let routes = api::routes(state).merge(health_router(state.config.app));
    create_router(routes)
}
