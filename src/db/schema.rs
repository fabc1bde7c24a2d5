//! SQL DDL for initializing the key-value table.

/// SQLite schema with:
/// - `key` TEXT PRIMARY KEY (composite provider/user/org key)
/// - `value` TEXT, stored verbatim
/// - `updated_at` TEXT, RFC3339 of the last write
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
