/**
 * Server Configuration
 *
 * Configuration is read from environment variables (after `.env` is loaded
 * by the binary), with defaults suitable for local development.
 *
 * | Variable       | Default | Meaning                                      |
 * |----------------|---------|----------------------------------------------|
 * | `SERVER_PORT`  | 3000    | TCP port to listen on                        |
 * | `DATABASE_URL` | unset   | PostgreSQL URL; unset selects the memory store |
 * | `BCRYPT_COST`  | 10      | bcrypt work factor                           |
 *
 * Unparsable values are logged and replaced by the default.
 */

use std::sync::Arc;

use crate::backend::auth::password::DEFAULT_HASH_COST;
use crate::backend::store::{MemoryStore, PgStore, Store, StoreError};

pub const DEFAULT_PORT: u16 = 3000;

/// Settings for one server process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            bcrypt_cost: DEFAULT_HASH_COST,
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default", name, raw);
            default
        }),
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_or("SERVER_PORT", lookup("SERVER_PORT"), DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            bcrypt_cost: parse_or("BCRYPT_COST", lookup("BCRYPT_COST"), DEFAULT_HASH_COST),
        }
    }
}

/// Open the record store selected by `config`
///
/// With `DATABASE_URL` set this connects to PostgreSQL and runs migrations,
/// returning any failure. Without it the server runs on the in-memory store.
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn Store>, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = PgStore::connect(url).await.inspect_err(|e| {
                tracing::error!("Failed to open database: {:?}", e);
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
