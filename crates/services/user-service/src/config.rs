//! User service configuration.

use std::env;

use clap::ValueEnum;

use common::{AppError, AppResult, DatabaseConfig};

/// Storage backend behind the user repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreKind {
    /// Process-local collection, lost on exit
    #[default]
    Memory,
    /// `users` table in Postgres
    Postgres,
}

/// User service configuration.
#[derive(Clone)]
pub struct UserServiceConfig {
    /// Postgres connection address (`DB_ADDR`, then `DATABASE_URL`)
    pub database_url: Option<String>,
    /// Selected storage backend, taken from `--store` or `USER_STORE`
    pub store: StoreKind,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
}

impl std::fmt::Debug for UserServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("store", &self.store)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl UserServiceConfig {
    /// Load connection settings from environment variables.
    ///
    /// The backend is left at its default; the CLI parses `USER_STORE`.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database_url: env::var("DB_ADDR")
                .or_else(|_| env::var("DATABASE_URL"))
                .ok()
                .filter(|url| !url.is_empty()),
            store: StoreKind::default(),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
        }
    }

    /// Connection address, required by the Postgres store.
    pub fn require_database_url(&self) -> AppResult<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| AppError::config("DB_ADDR not set in environment"))
    }

    /// Pool settings for the Postgres store.
    pub fn database_config(&self) -> AppResult<DatabaseConfig> {
        Ok(DatabaseConfig {
            url: self.require_database_url()?.to_string(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
        })
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            database_url: None,
            store: StoreKind::default(),
            max_connections: defaults.max_connections,
            min_connections: defaults.min_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_kind_values() {
        assert_eq!(StoreKind::from_str("memory", true), Ok(StoreKind::Memory));
        assert_eq!(StoreKind::from_str("Postgres", true), Ok(StoreKind::Postgres));
        assert!(StoreKind::from_str("postgress", true).is_err());
        assert!(StoreKind::from_str("sqlite", true).is_err());
    }

    #[test]
    fn test_missing_database_url_is_config_error() {
        let config = UserServiceConfig::default();

        assert!(matches!(
            config.require_database_url(),
            Err(AppError::Config(_))
        ));
        assert!(config.database_config().is_err());
    }

    #[test]
    fn test_database_config_carries_pool_settings() {
        let config = UserServiceConfig {
            database_url: Some("postgres://localhost/users".to_string()),
            store: StoreKind::Postgres,
            max_connections: 4,
            min_connections: 2,
        };

        let db = config.database_config().unwrap();
        assert_eq!(db.url, "postgres://localhost/users");
        assert_eq!(db.max_connections, 4);
        assert_eq!(db.min_connections, 2);
    }

    #[test]
    fn test_debug_redacts_url() {
        let config = UserServiceConfig {
            database_url: Some("postgres://secret@localhost/users".to_string()),
            ..UserServiceConfig::default()
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("REDACTED"));
    }
}
