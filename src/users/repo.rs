use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::users::repo_types::{seed_users, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<User>;
    /// First record whose id matches exactly.
    async fn find_by_id(&self, id: &str) -> Option<User>;
    /// Appends a record to the end of the collection.
    async fn insert(&self, user: User) -> User;
}

/// Process-lifetime user collection.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    async fn insert(&self, user: User) -> User {
        self.users.write().await.push(user.clone());
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn seeded_repository_has_five_users_in_order() {
        let repo = InMemoryUserRepository::seeded();
        let users = repo.list().await;
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            ["John Doe", "Jane Smith", "Alice Johnson", "Bob Brown", "Charlie Davis"]
        );
    }

    #[tokio::test]
    async fn find_by_id_returns_first_exact_match() {
        let first = User {
            id: "dup".into(),
            name: "First".into(),
            email: "first@example.com".into(),
            role: "admin".into(),
        };
        let second = User {
            name: "Second".into(),
            ..first.clone()
        };
        let repo = InMemoryUserRepository::with_users(vec![first.clone(), second]);

        assert_eq!(repo.find_by_id("dup").await, Some(first));
        assert_eq!(repo.find_by_id("DUP").await, None);
        assert_eq!(repo.find_by_id("du").await, None);
    }

    #[tokio::test]
    async fn insert_appends_to_the_end() {
        let repo = InMemoryUserRepository::seeded();
        let created = repo.insert(User::new("X", "x@x.com", "viewer")).await;

        let users = repo.list().await;
        assert_eq!(users.len(), 6);
        assert_eq!(users.last(), Some(&created));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_are_all_kept() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.insert(User::new(format!("user-{i}"), "u@example.com", "staff"))
                        .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.expect("task").id);
        }

        let stored = repo.list().await;
        assert_eq!(stored.len(), 64);
        for id in ids {
            assert!(stored.iter().any(|u| u.id == id));
        }
    }
}
