//! Store lifecycle and ingestion runs.
//!
//! Provides [`Migration`] for creating and dropping the verse table,
//! ingesting every configured corpus, and reporting what the store holds.
//!
//! # Example
//!
//! ```no_run
//! use rusqlite::Connection;
//! use scripture_db::LoaderConfig;
//! use scripture_sqlite::{Migration, Progress};
//!
//! let config = LoaderConfig::default();
//! let conn = Connection::open(&config.database).unwrap();
//! let mut migration = Migration::new(conn);
//!
//! let report = migration
//!     .ingest(&config, |progress| {
//!         if let Progress::Loading { corpus } = progress {
//!             println!("Loading {corpus}...");
//!         }
//!     })
//!     .unwrap();
//! println!("{} verses inserted", report.inserted());
//! ```

use rusqlite::Connection;
use scripture_core::Source;
use scripture_db::{CorpusConfig, CorpusLoader, LoaderConfig};
use tracing::{debug, info};

use crate::error::{Result, SqliteError};
use crate::insert::insert_verses;
use crate::schema::{DROP_SQL, SCHEMA_SQL, VERSES_TABLE};

/// Manages the verse store behind an exclusively owned connection.
///
/// [`up`](Self::up) and [`down`](Self::down) create and drop the table,
/// [`ingest`](Self::ingest) loads every configured corpus, and
/// [`status`](Self::status) reports row counts.
pub struct Migration {
    conn: Connection,
}

impl Migration {
    /// Wraps a connection. Nothing is created until [`up`](Self::up) or
    /// [`ingest`](Self::ingest) runs.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Creates the verse table and indexes.
    ///
    /// Uses `CREATE ... IF NOT EXISTS` so it is safe to call multiple times.
    /// Executes within a transaction.
    pub fn up(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA_SQL)
            .map_err(|e| SqliteError::MigrationError(format!("failed to create tables: {e}")))?;
        tx.commit()?;
        Ok(())
    }

    /// Drops the indexes and the verse table.
    ///
    /// Safe to call when nothing exists. Executes within a transaction.
    pub fn down(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(DROP_SQL)
            .map_err(|e| SqliteError::MigrationError(format!("failed to drop tables: {e}")))?;
        tx.commit()?;
        Ok(())
    }

    /// Initializes the store and loads every configured corpus in order.
    ///
    /// All inserts run inside one transaction that is committed once at the
    /// end. `on_progress` is called when each corpus starts and finishes.
    ///
    /// Each corpus is read and mapped completely before any of its rows are
    /// written. When a corpus fails, the corpora loaded before it are still
    /// committed and the error is returned; nothing is rolled back.
    ///
    /// Re-running against a populated store only adds missing references.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::LoaderError`] if a corpus file is missing or
    /// malformed, or [`SqliteError::DatabaseError`] if a write fails.
    pub fn ingest<F>(&mut self, config: &LoaderConfig, mut on_progress: F) -> Result<IngestReport>
    where
        F: FnMut(&Progress),
    {
        self.up()?;

        let loader = CorpusLoader::from_config(config);
        let tx = self.conn.transaction()?;
        let mut report = IngestReport::default();

        let outcome = load_corpora(&tx, &loader, &config.corpora, &mut report, &mut on_progress);
        tx.commit()?;
        outcome?;

        info!(
            corpora = report.corpora.len(),
            inserted = report.inserted(),
            ignored = report.ignored(),
            "Ingestion committed"
        );
        on_progress(&Progress::Committed {
            inserted: report.inserted(),
        });
        Ok(report)
    }

    /// Drops the store, recreates it, and ingests every configured corpus.
    ///
    /// Equivalent to calling [`down`](Self::down) then
    /// [`ingest`](Self::ingest).
    pub fn refresh<F>(&mut self, config: &LoaderConfig, on_progress: F) -> Result<IngestReport>
    where
        F: FnMut(&Progress),
    {
        self.down()?;
        self.ingest(config, on_progress)
    }

    /// Returns the current state of the store.
    pub fn status(&self) -> Result<StoreStatus> {
        if !self.table_exists()? {
            return Ok(StoreStatus::default());
        }

        let mut stmt = self.conn.prepare(&format!(
            "SELECT source, COUNT(*) FROM {VERSES_TABLE} GROUP BY source ORDER BY source"
        ))?;
        let per_source = stmt
            .query_map([], |row| {
                let source: Option<String> = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((source.unwrap_or_default(), count as usize))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(StoreStatus {
            table_exists: true,
            verse_count: per_source.iter().map(|(_, count)| count).sum(),
            per_source,
        })
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Consumes the migration and returns the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }

    fn table_exists(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
            [VERSES_TABLE],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

fn load_corpora<F>(
    conn: &Connection,
    loader: &CorpusLoader,
    corpora: &[CorpusConfig],
    report: &mut IngestReport,
    on_progress: &mut F,
) -> Result<()>
where
    F: FnMut(&Progress),
{
    for corpus in corpora {
        on_progress(&Progress::Loading {
            corpus: corpus.name.clone(),
        });
        info!(corpus = %corpus.name, "Loading corpus");

        let mapped = loader.load(corpus)?;
        let counts = insert_verses(conn, &mapped.records)?;

        let corpus_report = CorpusReport {
            name: corpus.name.clone(),
            sources: corpus.format.sources(),
            mapped: mapped.records.len(),
            inserted: counts.inserted,
            ignored: counts.ignored,
            skipped_empty: mapped.skipped_empty,
        };
        debug!(
            corpus = %corpus_report.name,
            mapped = corpus_report.mapped,
            inserted = corpus_report.inserted,
            ignored = corpus_report.ignored,
            "Corpus loaded"
        );
        on_progress(&Progress::Loaded(corpus_report.clone()));
        report.corpora.push(corpus_report);
    }
    Ok(())
}

/// Progress events emitted by [`Migration::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A corpus is about to be read.
    Loading { corpus: String },
    /// A corpus has been written.
    Loaded(CorpusReport),
    /// The run's transaction was committed.
    Committed { inserted: usize },
}

/// Outcome of loading one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusReport {
    /// Corpus display name.
    pub name: String,
    /// Source tags the corpus was stored under.
    pub sources: Vec<Source>,
    /// Records produced by the mapper.
    pub mapped: usize,
    /// Records that became new rows.
    pub inserted: usize,
    /// Records whose reference already existed.
    pub ignored: usize,
    /// Verses dropped for having empty text.
    pub skipped_empty: usize,
}

/// Report of an ingestion run, one entry per corpus in load order.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub corpora: Vec<CorpusReport>,
}

impl IngestReport {
    /// Total rows written across all corpora.
    pub fn inserted(&self) -> usize {
        self.corpora.iter().map(|c| c.inserted).sum()
    }

    /// Total records ignored as duplicates across all corpora.
    pub fn ignored(&self) -> usize {
        self.corpora.iter().map(|c| c.ignored).sum()
    }
}

/// Snapshot of the verse store.
#[derive(Debug, Clone, Default)]
pub struct StoreStatus {
    /// Whether the verse table exists.
    pub table_exists: bool,
    /// Total number of verse rows.
    pub verse_count: usize,
    /// Row count per source tag, ordered by tag.
    pub per_source: Vec<(String, usize)>,
}
