//! SQLite-backed contact store.
//!
//! # Responsibilities
//! - Own the connection pool and the contacts table schema
//! - Translate store operations into single SQL statements
//!
//! # Design Decisions
//! - `phone` carries a UNIQUE constraint so concurrent inserts of the same
//!   number cannot both land; the violation surfaces to the service layer
//! - AUTOINCREMENT keeps row ids monotonically increasing and never reused
//! - Schema is created on connect; there is no migration tooling

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::contacts::model::{Contact, ContactDraft};

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS contacts (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    phone   TEXT NOT NULL UNIQUE,
    email   TEXT,
    address TEXT
)";

/// Handle on the contacts table, cheap to clone and share.
#[derive(Debug, Clone)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    /// Connect to the database named by the config and ensure the schema
    /// exists. The database file is created when missing.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// All contacts, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<Contact>, sqlx::Error> {
        sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email, address FROM contacts ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Contact>, sqlx::Error> {
        sqlx::query_as::<_, Contact>(
            "SELECT id, name, phone, email, address FROM contacts WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Whether any contact other than `exclude` already uses this phone.
    pub async fn phone_in_use(
        &self,
        phone: &str,
        exclude: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        let existing = match exclude {
            Some(id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT id FROM contacts WHERE phone = ?1 AND id <> ?2 LIMIT 1",
                )
                .bind(phone)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT id FROM contacts WHERE phone = ?1 LIMIT 1")
                    .bind(phone)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };
        Ok(existing.is_some())
    }

    /// Insert a row and return its assigned id.
    pub async fn insert(&self, draft: &ContactDraft) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO contacts (name, phone, email, address) VALUES (?1, ?2, ?3, ?4)")
                .bind(&draft.name)
                .bind(&draft.phone)
                .bind(&draft.email)
                .bind(&draft.address)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Replace every mutable field of a row. Returns rows affected.
    pub async fn update(&self, id: i64, draft: &ContactDraft) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, address = ?4 WHERE id = ?5",
        )
        .bind(&draft.name)
        .bind(&draft.phone)
        .bind(&draft.email)
        .bind(&draft.address)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a row. Returns rows affected.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Whether a store error is the phone UNIQUE constraint firing.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.kind() == sqlx::error::ErrorKind::UniqueViolation
    )
}
