/**
 * PostgreSQL Store
 *
 * sqlx-backed implementation of the record store. Schema lives in
 * `migrations/` and is applied by `PgStore::connect`.
 *
 * Every statement touches a single row, so Postgres row locking gives the
 * per-record atomicity the services rely on.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{StoreError, TreatmentStore, UserStore};
use crate::shared::{Treatment, TreatmentFields};

const USER_COLUMNS: &str = "id, email, password_hash, token, created_at, updated_at";
const TREATMENT_COLUMNS: &str =
    "id, name, tooth, radiographs, date, owner, created_at, updated_at";

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct TreatmentRow {
    id: Uuid,
    name: String,
    tooth: String,
    radiographs: String,
    date: String,
    owner: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TreatmentRow> for Treatment {
    fn from(row: TreatmentRow) -> Self {
        Treatment {
            id: row.id,
            name: row.name,
            tooth: row.tooth,
            radiographs: row.radiographs,
            date: row.date,
            owner: row.owner,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Map unique-constraint violations to `StoreError::Duplicate`
fn unique_as_duplicate(field: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return StoreError::Duplicate(field);
            }
        }
        StoreError::Database(err)
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and apply pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO users (id, email, password_hash, token, created_at, updated_at) \
             VALUES ($1, $2, $3, NULL, $4, $4) RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(password_hash)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(unique_as_duplicate("email"))
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE token = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $1, updated_at = $2 WHERE id = $3",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn set_token(&self, id: Uuid, token: Option<&str>) -> Result<User, StoreError> {
        let query = format!(
            "UPDATE users SET token = $1, updated_at = $2 WHERE id = $3 RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(token)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl TreatmentStore for PgStore {
    async fn insert_treatment(
        &self,
        owner: Uuid,
        fields: TreatmentFields,
    ) -> Result<Treatment, StoreError> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO treatments (id, name, tooth, radiographs, date, owner, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING {TREATMENT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, TreatmentRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&fields.name)
            .bind(&fields.tooth)
            .bind(&fields.radiographs)
            .bind(&fields.date)
            .bind(owner)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn treatments_by_owner(&self, owner: Uuid) -> Result<Vec<Treatment>, StoreError> {
        let query = format!(
            "SELECT {TREATMENT_COLUMNS} FROM treatments WHERE owner = $1 ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, TreatmentRow>(&query)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Treatment::from).collect())
    }

    async fn find_treatment(&self, id: Uuid) -> Result<Option<Treatment>, StoreError> {
        let query = format!("SELECT {TREATMENT_COLUMNS} FROM treatments WHERE id = $1");
        let row = sqlx::query_as::<_, TreatmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Treatment::from))
    }

    async fn save_treatment(&self, treatment: &Treatment) -> Result<(), StoreError> {
        // owner and created_at never change
        let result = sqlx::query(
            r#"
            UPDATE treatments
            SET name = $1, tooth = $2, radiographs = $3, date = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(&treatment.name)
        .bind(&treatment.tooth)
        .bind(&treatment.radiographs)
        .bind(&treatment.date)
        .bind(treatment.updated_at)
        .bind(treatment.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_treatment(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM treatments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
