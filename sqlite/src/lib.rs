//! SQLite verse store for normalized scripture corpora.
//!
//! This crate owns the persisted side of ingestion: the `verses` table, the
//! deduplicating insert every corpus goes through, and the sequential
//! ingestion run that ties configuration, mapping and storage together.
//!
//! # Architecture
//!
//! - **`schema`** — table and index DDL
//! - **`insert`** — the canonical `INSERT OR IGNORE` write path
//! - **`migration`** — lifecycle (up/down/refresh/status) and ingestion
//!
//! # Quick start
//!
//! ```no_run
//! use rusqlite::Connection;
//! use scripture_db::LoaderConfig;
//! use scripture_sqlite::Migration;
//!
//! let config = LoaderConfig::default();
//! let conn = Connection::open(&config.database).unwrap();
//! let mut migration = Migration::new(conn);
//!
//! let report = migration.ingest(&config, |_| {}).unwrap();
//! for corpus in &report.corpora {
//!     println!("{}: {} inserted, {} ignored", corpus.name, corpus.inserted, corpus.ignored);
//! }
//!
//! let status = migration.status().unwrap();
//! println!("Verses: {}", status.verse_count);
//! ```
//!
//! # Deduplication
//!
//! The table has a `UNIQUE(source, book, chapter, verse)` constraint and all
//! writes use `INSERT OR IGNORE`: the first record for a reference wins and
//! later ones are silently dropped. Re-running an ingestion is therefore
//! idempotent.

mod error;
mod insert;
mod migration;
mod schema;

pub use error::{Result, SqliteError};
pub use insert::{InsertCounts, insert_verse, insert_verses};
pub use migration::{CorpusReport, IngestReport, Migration, Progress, StoreStatus};
pub use schema::{DROP_SQL, SCHEMA_SQL, VERSES_TABLE};
