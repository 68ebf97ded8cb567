//! Application state shared by the route builders.

use domain_users::InMemoryUserRepository;

/// Process-lifetime state.
///
/// The user store is created once at startup and dropped with the process;
/// cloning the state shares the same store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// In-memory user records and id counter
    pub users: InMemoryUserRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            users: InMemoryUserRepository::new(),
        }
    }
}
