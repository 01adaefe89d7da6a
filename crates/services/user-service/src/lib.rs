//! User Service Library
//!
//! Repository/service split for a `User` entity. The service layer talks
//! to storage only through [`repository::UserRepository`], so the in-memory
//! and Postgres backends are interchangeable.

pub mod config;
pub mod demo;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::{StoreKind, UserServiceConfig};
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, PostgresUserStore, UserRepository};
use crate::service::UserManager;

/// Open the storage backend selected by the configuration.
///
/// The Postgres backend requires a connection address and applies pending
/// migrations before returning.
pub async fn open_repository(config: &UserServiceConfig) -> AppResult<Arc<dyn UserRepository>> {
    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory user store");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreKind::Postgres => {
            let db = Database::connect(&config.database_config()?).await?;
            info!("Connected to database successfully");
            Ok(Arc::new(PostgresUserStore::new(db.get_connection())))
        }
    }
}

/// Open the configured backend and wrap it in the user service.
pub async fn build_service(config: &UserServiceConfig) -> AppResult<UserManager> {
    let repo = open_repository(config).await?;
    Ok(UserManager::new(repo))
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &UserServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_config()?).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
