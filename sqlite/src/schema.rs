//! SQL for the `verses` table.
//!
//! # Table structure
//!
//! A single table holds every corpus:
//!
//! - `verses` — one row per `(source, book, chapter, verse)`, enforced by a
//!   `UNIQUE` constraint, with an autoincrement `id`.
//!
//! Three lookup indexes sit on top of it:
//!
//! - `idx_reference` on `(book, chapter, verse)`
//! - `idx_source` on `(source)`
//! - `idx_text` on `(text)`
//!
//! All statements use `IF [NOT] EXISTS`, so they are safe to run against a
//! store that is already initialized (or already gone).

/// Name of the verse table.
pub const VERSES_TABLE: &str = "verses";

/// Creates the verse table and its indexes.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS verses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source TEXT,
    testament TEXT,
    book TEXT,
    chapter INTEGER,
    verse INTEGER,
    text TEXT,
    UNIQUE(source, book, chapter, verse)
);

CREATE INDEX IF NOT EXISTS idx_reference ON verses(book, chapter, verse);
CREATE INDEX IF NOT EXISTS idx_source ON verses(source);
CREATE INDEX IF NOT EXISTS idx_text ON verses(text);
"#;

/// Drops the indexes and the verse table.
pub const DROP_SQL: &str = r#"
DROP INDEX IF EXISTS idx_text;
DROP INDEX IF EXISTS idx_source;
DROP INDEX IF EXISTS idx_reference;
DROP TABLE IF EXISTS verses;
"#;
