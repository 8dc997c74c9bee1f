use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::{ApiError, ErrorResponse},
    state::AppState,
    users::{
        dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UsersResponse},
        services,
    },
};

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(remove_user),
        )
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "The user has been successfully created.", body = UserResponse)
    ),
    security(("access-token" = []))
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> (StatusCode, Json<UserResponse>) {
    let res = services::create_user(&state, payload).await;
    (StatusCode::CREATED, Json(res))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users.", body = UsersResponse)
    ),
    security(("access-token" = []))
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(services::list_users(&state).await)
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The found user.", body = UserResponse),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    security(("access-token" = []))
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    services::get_user(&state, &id).await.map(Json)
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "The user has been successfully updated.", body = UserResponse),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    security(("access-token" = []))
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<UpdateUserRequest>>,
) -> Result<Json<UserResponse>, ApiError> {
    let payload = payload.map(|Json(body)| body).unwrap_or_default();
    services::update_user(&state, &id, payload).await.map(Json)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user has been successfully deleted.", body = UserResponse),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    security(("access-token" = []))
)]
#[instrument(skip(state))]
pub async fn remove_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    services::remove_user(&state, &id).await.map(Json)
}
