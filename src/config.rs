use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    pub ui_path: String,
    pub spec_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub docs: DocsConfig,
    pub seed_users: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            docs: DocsConfig {
                ui_path: "/docs".into(),
                spec_path: "/api-docs/openapi.json".into(),
            },
            seed_users: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source, falling back to defaults
    /// for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid APP_PORT {v:?}"))?,
            None => defaults.port,
        };

        let seed_users = match lookup("SEED_USERS") {
            Some(v) => parse_bool(&v).with_context(|| format!("invalid SEED_USERS {v:?}"))?,
            None => defaults.seed_users,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port,
            docs: DocsConfig {
                ui_path: lookup("DOCS_PATH").unwrap_or(defaults.docs.ui_path),
                spec_path: lookup("OPENAPI_PATH").unwrap_or(defaults.docs.spec_path),
            },
            seed_users,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
