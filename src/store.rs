//! `advert` table DDL and record persistence over SQLite.

use crate::config::AppConfig;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
const ADVERT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS advert (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(25) NOT NULL,
        description VARCHAR(200) NOT NULL,
        created_at DATE NOT NULL,
        owner VARCHAR(30) NOT NULL
    )
"#;

const ADVERT_COLUMNS: &str = "id, title, description, created_at, owner";

/// A persisted advert, serialized as `{id, title, description, created_at, owner}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Advert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDate,
    pub owner: String,
}

/// Client-writable fields of an advert, already validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAdvert {
    pub title: String,
    pub description: String,
    pub owner: String,
}

/// Store handle shared by all handlers. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct AdvertStore {
    pool: SqlitePool,
}

impl AdvertStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `advert` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(ADVERT_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert with today's local date as `created_at`. Returns the stored row.
    pub async fn insert(&self, advert: &NewAdvert) -> Result<Advert, AppError> {
        self.insert_on(advert, chrono::Local::now().date_naive()).await
    }

    pub async fn insert_on(
        &self,
        advert: &NewAdvert,
        created_at: NaiveDate,
    ) -> Result<Advert, AppError> {
        let sql = format!(
            "INSERT INTO advert (title, description, created_at, owner) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            ADVERT_COLUMNS
        );
        tracing::debug!(sql = %sql, title = %advert.title, owner = %advert.owner, "query");
        let row = sqlx::query_as::<_, Advert>(&sql)
            .bind(&advert.title)
            .bind(&advert.description)
            .bind(created_at)
            .bind(&advert.owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Advert>, AppError> {
        let sql = format!("SELECT {} FROM advert WHERE id = ?", ADVERT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Advert>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All adverts, ascending by id.
    pub async fn list_all(&self) -> Result<Vec<Advert>, AppError> {
        let sql = format!("SELECT {} FROM advert ORDER BY id", ADVERT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Advert>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Delete by id. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM advert WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cheap round trip used by readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Open the pool at `config.database_url`, creating the database file when missing,
/// and make sure the `advert` table exists.
pub async fn connect_store(config: &AppConfig) -> Result<AdvertStore, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    let store = AdvertStore::new(pool);
    store.ensure_schema().await?;
    Ok(store)
}
