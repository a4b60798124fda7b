use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::config::{AppConfig, StorageBackend};
use crate::users::{
    repo::PgUserService,
    services::{InMemoryUserService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds the configured backend. Called once at startup.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let users: Arc<dyn UserService> = match config.backend {
            StorageBackend::Memory => Arc::new(InMemoryUserService::default()),
            StorageBackend::Postgres => {
                let db_cfg = config
                    .database
                    .as_ref()
                    .context("DATABASE_URL must be set for the postgres backend")?;
                let db = PgPoolOptions::new()
                    .max_connections(db_cfg.max_connections)
                    .acquire_timeout(db_cfg.connect_timeout)
                    .connect(&db_cfg.url)
                    .await
                    .context("connect to database")?;
                Arc::new(PgUserService::new(db))
            }
        };
        tracing::info!(backend = ?config.backend, "user storage ready");

        Ok(Self::from_parts(users, Arc::new(config)))
    }

    pub fn from_parts(users: Arc<dyn UserService>, config: Arc<AppConfig>) -> Self {
        Self { users, config }
    }

    /// Fresh in-memory state with default config.
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(InMemoryUserService::default()),
            Arc::new(AppConfig::default()),
        )
    }
}
