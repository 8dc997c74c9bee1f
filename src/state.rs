use crate::config::AppConfig;
use crate::users::repo::{InMemoryUserRepository, UserRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let users = if config.seed_users {
            InMemoryUserRepository::seeded()
        } else {
            InMemoryUserRepository::new()
        };
        tracing::debug!(seeded = config.seed_users, "user directory ready");

        Self::from_parts(Arc::new(config), Arc::new(users))
    }

    pub fn from_parts(config: Arc<AppConfig>, users: Arc<dyn UserRepository>) -> Self {
        Self { config, users }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::with_config(AppConfig::default())
    }
}
