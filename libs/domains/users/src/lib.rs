//! Users Domain
//!
//! CRUD over an in-memory collection of user records, with schema-based
//! validation of untyped JSON payloads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌────────────┐
//! │   Service   │ ──▶ │ Validation │  ← payload → typed fragment
//! └──────┬──────┘     └────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← ordered store + id counter (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, fragments, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router: axum::Router = axum::Router::new().nest("/users", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult, ValidationError, Violation};
pub use models::{CreateUser, Fragment, UpdateUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use validation::{Mode, validate};
