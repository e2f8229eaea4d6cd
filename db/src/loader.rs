//! Corpus file reading.
//!
//! [`CorpusLoader`] resolves a [`CorpusConfig`] against the configured texts
//! directory, reads the whole file into memory and maps it with the
//! corpus's layout.
//!
//! ```no_run
//! use scripture_db::{CorpusLoader, LoaderConfig};
//!
//! let config = LoaderConfig::default();
//! let loader = CorpusLoader::from_config(&config);
//! for corpus in &config.corpora {
//!     let mapped = loader.load(corpus).unwrap();
//!     println!("{}: {} verses", corpus.name, mapped.records.len());
//! }
//! ```

use std::path::{Path, PathBuf};

use scripture_core::{Canon, MappedCorpus, map_document};
use tracing::debug;

use crate::config::{CorpusConfig, LoaderConfig};
use crate::error::{LoadError, Result};

/// Reads and maps corpus files from a texts directory.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    texts_dir: PathBuf,
    canon: Canon,
}

impl CorpusLoader {
    pub fn new(texts_dir: impl Into<PathBuf>, canon: Canon) -> Self {
        Self {
            texts_dir: texts_dir.into(),
            canon,
        }
    }

    /// Creates a loader using the config's texts directory and canon.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.texts_dir.clone(), config.canon())
    }

    pub fn texts_dir(&self) -> &Path {
        &self.texts_dir
    }

    /// Reads one corpus file and maps it into verse records.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::IoError`] if the file is missing or unreadable,
    /// or [`LoadError::MapError`] if it is not valid JSON in the expected
    /// layout.
    pub fn load(&self, corpus: &CorpusConfig) -> Result<MappedCorpus> {
        let path = self.texts_dir.join(&corpus.file);
        debug!(corpus = %corpus.name, path = %path.display(), "Reading corpus file");

        let json = std::fs::read_to_string(&path).map_err(|source| LoadError::IoError {
            path: path.clone(),
            source,
        })?;

        map_document(&corpus.format, &json, &self.canon).map_err(|source| LoadError::MapError {
            corpus: corpus.name.clone(),
            source,
        })
    }
}
