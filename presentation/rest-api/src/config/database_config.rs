use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: migrations directory
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("DATABASE_MAX_CONNECTIONS must be an unsigned integer")?;
        let migrations_path = lookup("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Connects the pool and applies pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max_connections) = settings.max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .context("failed to run database migrations")?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_fail_when_database_url_missing() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[]));

        assert!(result.is_err());
    }

    #[test]
    fn should_apply_defaults_when_only_url_set() {
        let settings =
            DatabaseSettings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/store")]))
                .unwrap();

        assert_eq!(settings.url, "postgres://db/store");
        assert_eq!(settings.max_connections, None);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/store"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(result.is_err());
    }
}
