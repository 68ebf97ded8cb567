use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User storage
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign the next id and append a new user
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// All users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>>;

    /// Check whether a user with this ID is stored
    async fn exists(&self, id: u64) -> UserResult<bool>;

    /// Merge `update` into the stored user, keeping its position
    async fn update(&self, id: u64, update: UpdateUser) -> UserResult<User>;

    /// Remove a user by ID
    async fn delete(&self, id: u64) -> UserResult<()>;
}

#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl UserTable {
    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// In-memory implementation of UserRepository.
///
/// Users live in a `Vec` in insertion order next to the id counter; both sit
/// behind one lock so id assignment and append are a single step. Clones
/// share the same table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let user = User::new(id, input);
        table.users.push(user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.id == id).cloned())
    }

    async fn exists(&self, id: u64) -> UserResult<bool> {
        let table = self.table.read().await;
        Ok(table.position(id).is_some())
    }

    async fn update(&self, id: u64, update: UpdateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        let index = table.position(id).ok_or(UserError::NotFound)?;
        let user = &mut table.users[index];
        user.apply_update(update);

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> UserResult<()> {
        let mut table = self.table.write().await;

        let index = table.position(id).ok_or(UserError::NotFound)?;
        table.users.remove(index);

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(input("Ada")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.email, "ada@example.com");

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(repo.get_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        for name in ["Ada", "Grace", "Linus"] {
            repo.create(input(name)).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(input("Ada")).await.unwrap();
        let second = repo.create(input("Grace")).await.unwrap();
        repo.delete(second.id).await.unwrap();
        repo.delete(first.id).await.unwrap();
        assert!(repo.is_empty().await);

        let third = repo.create(input("Linus")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_update_merges_in_place() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("Ada")).await.unwrap();
        repo.create(input("Grace")).await.unwrap();
        repo.create(input("Linus")).await.unwrap();

        let updated = repo
            .update(
                2,
                UpdateUser {
                    name: Some("Grace Hopper".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Grace Hopper");
        assert_eq!(updated.email, "grace@example.com");

        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.list().await.unwrap()[1].name, "Grace Hopper");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update(9, UpdateUser::default()).await;
        assert!(matches!(result, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_shifts_remaining_entries() {
        let repo = InMemoryUserRepository::new();
        for name in ["Ada", "Grace", "Linus"] {
            repo.create(input(name)).await.unwrap();
        }

        repo.delete(2).await.unwrap();
        assert!(!repo.exists(2).await.unwrap());
        assert!(matches!(repo.delete(2).await, Err(UserError::NotFound)));

        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("user{}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
        assert_eq!(repo.len().await, 32);
    }
}
