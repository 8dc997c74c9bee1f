use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User record held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// The unique identifier of the user
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// The name of the user
    #[schema(example = "John Doe")]
    pub name: String,
    /// The email address of the user
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// The role of the user
    #[schema(example = "admin")]
    pub role: String,
}

impl User {
    /// Builds a record with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Records the directory starts with when seeding is enabled.
pub(crate) fn seed_users() -> Vec<User> {
    vec![
        User::new("John Doe", "john.doe@example.com", "admin"),
        User::new("Jane Smith", "jane.smith@example.com", "staff"),
        User::new("Alice Johnson", "alice.johnson@example.com", "viewer"),
        User::new("Bob Brown", "bob.brown@example.com", "admin"),
        User::new("Charlie Davis", "charlie.davis@example.com", "staff"),
    ]
}
