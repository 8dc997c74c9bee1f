pub(crate) mod dto;
pub mod handlers;
pub(crate) mod repo;
pub(crate) mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::users_routes())
}
