use crate::errors::ServerError;

/// Key-value persistence seam. The web app backs this with SQLite
/// (`db::kv::SqliteKv`); domain tests use the in-memory fake below.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove(&self, key: &str) -> Result<(), ServerError>;
}
