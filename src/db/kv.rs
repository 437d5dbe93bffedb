use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::auth::token::hash_token;
use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::kv::KvStore;

/// Visitor-scoped key-value store over the `kv_store` table.
/// Rows are keyed by the SHA-256 hash of the visitor cookie so the
/// raw bearer token never lands in the database.
pub struct SqliteKv<'a> {
    db: &'a Database,
    visitor_hash: [u8; 32],
}

impl<'a> SqliteKv<'a> {
    pub fn new(db: &'a Database, visitor_token: &str) -> Self {
        Self {
            db,
            visitor_hash: hash_token(visitor_token),
        }
    }
}

impl KvStore for SqliteKv<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM kv_store WHERE visitor_hash = ?1 AND key = ?2",
                params![self.visitor_hash.as_slice(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("kv get failed: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let now = Utc::now().naive_utc();
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (visitor_hash, key, value, updated_at)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(visitor_hash, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![self.visitor_hash.as_slice(), key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("kv set failed: {e}")))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "DELETE FROM kv_store WHERE visitor_hash = ?1 AND key = ?2",
                params![self.visitor_hash.as_slice(), key],
            )
            .map_err(|e| ServerError::DbError(format!("kv remove failed: {e}")))?;
            Ok(())
        })
    }
}
