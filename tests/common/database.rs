//! Database test fixtures and utilities
//!
//! PostgreSQL tests need a disposable database named by `TEST_DATABASE_URL`.
//! `DATABASE_URL` is never read here, since the fixtures truncate every
//! table. Without a test database [`TestDatabase::new`] returns `None` and
//! the calling test returns early. Tests sharing the database must be marked
//! `#[serial]`.

use dentrack::backend::store::PgStore;

/// URL of the test database, if one is configured
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Remove all rows while keeping the schema
pub async fn cleanup_test_data(store: &PgStore) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE treatments, users")
        .execute(store.pool())
        .await?;
    Ok(())
}

/// A migrated, empty test database
pub struct TestDatabase {
    store: PgStore,
}

impl TestDatabase {
    /// Connect, apply migrations and empty the tables
    pub async fn new() -> Option<Self> {
        let Some(url) = test_database_url() else {
            eprintln!("TEST_DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        };

        let store = PgStore::connect(&url)
            .await
            .expect("Failed to connect to test database");
        cleanup_test_data(&store)
            .await
            .expect("Failed to clean test database");

        Some(Self { store })
    }

    pub fn store(&self) -> &PgStore {
        &self.store
    }
}
