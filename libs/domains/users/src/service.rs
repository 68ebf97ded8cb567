use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use crate::validation;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Parse and validate a create body, then store the new user
    pub async fn create_user(&self, body: &[u8]) -> UserResult<User> {
        let payload = validation::parse_payload(body)?;
        let input = validation::validate_create(&payload)?;
        self.repository.create(input).await
    }

    /// List all users in insertion order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Merge a partial update body into an existing user.
    ///
    /// A missing user is reported before the body is parsed, so an unknown
    /// ID is a 404 even when the body is malformed.
    pub async fn update_user(&self, id: u64, body: &[u8]) -> UserResult<User> {
        if !self.repository.exists(id).await? {
            return Err(UserError::NotFound);
        }

        let payload = validation::parse_payload(body)?;
        let update = validation::validate_update(&payload)?;
        self.repository.update(id, update).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: u64) -> UserResult<()> {
        self.repository.delete(id).await
    }
}
