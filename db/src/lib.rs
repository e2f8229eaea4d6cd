//! Configuration and corpus file loading for scripture ingestion.
//!
//! This crate sits between the pure mappers in `scripture-core` and the
//! SQLite store: it knows where corpus files live and how to turn a file on
//! disk into verse records.
//!
//! # Quick start
//!
//! ```no_run
//! use scripture_db::{CorpusLoader, LoaderConfig};
//!
//! // Defaults: texts/ directory, bible_study.db, the four standard corpora
//! let config = LoaderConfig::default();
//!
//! // Or load overrides from YAML
//! let config = LoaderConfig::load("loader.yml").unwrap();
//!
//! let loader = CorpusLoader::from_config(&config);
//! let tanakh = loader.load(&config.corpora[0]).unwrap();
//! println!("{} verse records", tanakh.records.len());
//! ```

mod config;
mod error;
mod loader;

pub use config::{CorpusConfig, DEFAULT_DATABASE, DEFAULT_TEXTS_DIR, LoaderConfig, default_corpora};
pub use error::{LoadError, Result};
pub use loader::CorpusLoader;
