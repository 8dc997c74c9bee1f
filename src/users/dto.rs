use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::users::repo_types::User;

/// Request body for creating a user. Fields are taken as given.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
}

/// Partial update body; every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    #[schema(example = "admin")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserData {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersData {
    pub users: Vec<User>,
}

/// Envelope carrying a single user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = true)]
    pub status: bool,
    #[schema(example = "User created successfully")]
    pub message: String,
    pub data: UserData,
}

impl UserResponse {
    pub fn ok(message: &str, user: User) -> Self {
        Self {
            status: true,
            message: message.to_string(),
            data: UserData { user },
        }
    }
}

/// Envelope carrying the whole collection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(example = true)]
    pub status: bool,
    #[schema(example = "Users found successfully")]
    pub message: String,
    pub data: UsersData,
}

impl UsersResponse {
    pub fn ok(message: &str, users: Vec<User>) -> Self {
        Self {
            status: true,
            message: message.to_string(),
            data: UsersData { users },
        }
    }
}
