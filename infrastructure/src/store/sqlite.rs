//! SQLite cohort store
//!
//! Reads the host's `{prefix}cohort` and `{prefix}cohort_members` tables.
//! Site admins get a plain join; every other viewer gets the same join with
//! `c.visible = 1`, so hidden cohorts never leave the database for them.
//! No `ORDER BY` is applied: rows come back in the store's natural order.

use async_trait::async_trait;
use cohort_application::{CohortStore, StoreError};
use cohort_domain::{Cohort, CohortId, UserId};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_PREFIX: &str = "mdl_";

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

/// Cohort store over the host's SQLite database.
#[derive(Clone)]
pub struct SqliteCohortStore {
    pool: SqlitePool,
    prefix: String,
}

impl SqliteCohortStore {
    /// Opens an existing database read-only.
    ///
    /// # Errors
    ///
    /// [`StoreError::Database`] if the file is missing or cannot be opened.
    pub async fn open(db_path: &Path, prefix: impl Into<String>) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(db_path)
                    .read_only(true)
                    .create_if_missing(false),
            )
            .await
            .map_err(db_err)?;

        debug!("Opened cohort database {}", db_path.display());
        Ok(Self::from_pool(pool, prefix))
    }

    /// Creates (or opens) a writable database and ensures the cohort tables exist.
    pub async fn create(db_path: &Path, prefix: impl Into<String>) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(db_path)
                    .create_if_missing(true),
            )
            .await
            .map_err(db_err)?;

        let store = Self::from_pool(pool, prefix);
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Private in-memory database with the cohort tables created.
    ///
    /// A single long-lived connection keeps the database alive for the
    /// lifetime of the pool.
    pub async fn connect_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(db_err)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        let store = Self::from_pool(pool, DEFAULT_PREFIX);
        store.initialize_schema().await?;
        Ok(store)
    }

    /// Wraps an existing pool. `prefix` must already be validated.
    pub fn from_pool(pool: SqlitePool, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
        }
    }

    fn cohort_table(&self) -> String {
        format!("{}cohort", self.prefix)
    }

    fn members_table(&self) -> String {
        format!("{}cohort_members", self.prefix)
    }

    /// Creates the subset of the host schema this store reads.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                contextid INTEGER NOT NULL DEFAULT 1,
                name TEXT NOT NULL,
                idnumber TEXT,
                description TEXT,
                visible INTEGER NOT NULL DEFAULT 1
            )
            "#,
            self.cohort_table()
        ))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cohortid INTEGER NOT NULL,
                userid INTEGER NOT NULL,
                timeadded INTEGER NOT NULL DEFAULT 0,
                UNIQUE (cohortid, userid)
            )
            "#,
            self.members_table()
        ))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    /// Inserts a cohort record, keeping its id.
    pub async fn insert_cohort(&self, cohort: &Cohort) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "INSERT INTO {} (id, name, idnumber, description, visible) VALUES (?, ?, ?, ?, ?)",
            self.cohort_table()
        ))
        .bind(cohort.id.value())
        .bind(&cohort.name)
        .bind(&cohort.idnumber)
        .bind(&cohort.description)
        .bind(i64::from(cohort.visible))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    /// Adds `user` to `cohort`.
    pub async fn add_member(&self, cohort: CohortId, user: UserId) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "INSERT INTO {} (cohortid, userid) VALUES (?, ?)",
            self.members_table()
        ))
        .bind(cohort.value())
        .bind(user.value())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    fn membership_sql(&self, select: &str, visible_only: bool) -> String {
        let mut sql = format!(
            "SELECT {select}
               FROM {} c
               JOIN {} cm ON c.id = cm.cohortid
              WHERE cm.userid = ?",
            self.cohort_table(),
            self.members_table()
        );
        if visible_only {
            sql.push_str(" AND c.visible = 1");
        }
        sql
    }

    fn cohort_from_row(row: &SqliteRow) -> Result<Cohort, sqlx::Error> {
        Ok(Cohort {
            id: CohortId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            visible: row.try_get::<i64, _>("visible")? != 0,
            idnumber: row.try_get("idnumber")?,
            description: row.try_get("description")?,
        })
    }
}

#[async_trait]
impl CohortStore for SqliteCohortStore {
    async fn list_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<Vec<Cohort>, StoreError> {
        let sql = self.membership_sql(
            "c.id, c.name, c.idnumber, c.description, c.visible",
            visible_only,
        );
        let rows = sqlx::query(&sql)
            .bind(user.value())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter()
            .map(Self::cohort_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)
    }

    async fn count_cohorts_for_user(
        &self,
        user: UserId,
        visible_only: bool,
    ) -> Result<usize, StoreError> {
        let sql = self.membership_sql("COUNT(*)", visible_only);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(user.value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
