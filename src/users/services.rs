use tracing::{debug, info};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UsersResponse},
        repo_types::User,
    },
};

const USER_NOT_FOUND: &str = "User not found";

async fn find_existing(st: &AppState, id: &str) -> Result<User, ApiError> {
    match st.users.find_by_id(id).await {
        Some(user) => Ok(user),
        None => {
            debug!(%id, "user lookup missed");
            Err(ApiError::NotFound(USER_NOT_FOUND))
        }
    }
}

pub async fn create_user(st: &AppState, req: CreateUserRequest) -> UserResponse {
    let CreateUserRequest { name, email, role } = req;
    let user = st.users.insert(User::new(name, email, role)).await;
    info!(user_id = %user.id, "user created");
    UserResponse::ok("User created successfully", user)
}

pub async fn list_users(st: &AppState) -> UsersResponse {
    let users = st.users.list().await;
    debug!(count = users.len(), "users listed");
    UsersResponse::ok("Users found successfully", users)
}

pub async fn get_user(st: &AppState, id: &str) -> Result<UserResponse, ApiError> {
    let user = find_existing(st, id).await?;
    Ok(UserResponse::ok("User found successfully", user))
}

/// Locates the user and returns it; the stored record is left as it was.
pub async fn update_user(
    st: &AppState,
    id: &str,
    req: UpdateUserRequest,
) -> Result<UserResponse, ApiError> {
    let user = find_existing(st, id).await?;
    debug!(
        user_id = %user.id,
        name = req.name.is_some(),
        email = req.email.is_some(),
        role = req.role.is_some(),
        "update requested"
    );
    Ok(UserResponse::ok("User updated successfully", user))
}

/// Locates the user and returns it; the record stays in the directory.
pub async fn remove_user(st: &AppState, id: &str) -> Result<UserResponse, ApiError> {
    let user = find_existing(st, id).await?;
    debug!(user_id = %user.id, "remove requested");
    Ok(UserResponse::ok("User removed successfully", user))
}
