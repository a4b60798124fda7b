use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "postgres" | "pg" => Ok(StorageBackend::Postgres),
            other => Err(anyhow!("unknown storage backend {other:?} (expected memory or postgres)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StorageBackend,
    pub database: Option<DatabaseConfig>,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 50051,
            backend: StorageBackend::Memory,
            database: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let backend = parse_or(&lookup, "STORAGE_BACKEND", defaults.backend)?;

        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                connect_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_CONNECT_TIMEOUT_SECS",
                    5,
                )?),
            }),
            None if backend == StorageBackend::Postgres => {
                anyhow::bail!("DATABASE_URL must be set for the postgres backend")
            }
            None => None,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "APP_PORT", defaults.port)?,
            backend,
            database,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow!("invalid value {raw:?} for {key}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_in_memory_on_grpc_port() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.backend, StorageBackend::Memory);
        assert_eq!(cfg.port, 50051);
        assert!(cfg.database.is_none());
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:50051");
    }

    #[test]
    fn postgres_backend_reads_database_settings() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "Postgres"),
            ("DATABASE_URL", "postgres://u:p@db:5432/auth"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("APP_PORT", "6000"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend, StorageBackend::Postgres);
        let db = cfg.database.expect("database config");
        assert_eq!(db.url, "postgres://u:p@db:5432/auth");
        assert_eq!(db.max_connections, 4);
        assert_eq!(db.connect_timeout, Duration::from_secs(5));
        assert_eq!(cfg.port, 6000);
    }

    #[test]
    fn postgres_without_url_fails() {
        let err = AppConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "postgres")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn bad_values_fail_loudly() {
        assert!(AppConfig::from_lookup(lookup(&[("APP_PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "redis")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "-1")])).is_err());
    }
}
