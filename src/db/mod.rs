//! Key-value persistence for provider credentials.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: durable store backed by sqlx
//! - `memory.rs`: process-local store for tests and throwaway runs

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqliteKvStore, SqlitePool};

use crate::config::MEMORY_DATABASE_URL;
use crate::error::ConnectorError;
use async_trait::async_trait;
use std::sync::Arc;

/// Minimal get/set contract the credential adapter needs.
///
/// Values are opaque text and must round-trip byte-identical.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ConnectorError>;

    /// Insert or overwrite.
    async fn set(&self, key: &str, value: &str) -> Result<(), ConnectorError>;
}

/// Open the store selected by `database_url`.
pub async fn open(database_url: &str) -> Result<Arc<dyn KvStore>, ConnectorError> {
    if database_url == MEMORY_DATABASE_URL {
        return Ok(Arc::new(MemoryKvStore::new()));
    }
    let store = SqliteKvStore::connect(database_url).await?;
    Ok(Arc::new(store))
}
