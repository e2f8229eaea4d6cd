//! Loader configuration.
//!
//! Defines the YAML-serializable configuration that says where the corpus
//! files live, where the SQLite store is written, which corpora are loaded
//! (in order), and which books count as Old Testament.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the standard four-corpus setup.
//!
//! # Example YAML
//!
//! ```yaml
//! texts_dir: texts
//! database: bible_study.db
//! corpora:
//!   - name: Tanakh
//!     file: tanakh.json
//!     format: interleaved
//!     hebrew: tanakh_hebrew
//!     english: tanakh_english
//!   - name: KJV
//!     file: kjv.json
//!     format: classified
//!     source: kjv
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use scripture_core::{CANONICAL_OT_BOOKS, Canon, CorpusFormat, Source};
use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Default directory holding the corpus JSON files.
pub const DEFAULT_TEXTS_DIR: &str = "texts";
/// Default SQLite database file.
pub const DEFAULT_DATABASE: &str = "bible_study.db";

/// One corpus file and the layout it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Display name used in progress messages (e.g. `"Tanakh"`).
    pub name: String,
    /// File name, relative to [`LoaderConfig::texts_dir`].
    pub file: PathBuf,
    /// JSON layout and source tags.
    #[serde(flatten)]
    pub format: CorpusFormat,
}

impl CorpusConfig {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>, format: CorpusFormat) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            format,
        }
    }
}

/// Top-level loader configuration.
///
/// # Examples
///
/// ```
/// use scripture_db::LoaderConfig;
///
/// let config = LoaderConfig::default();
/// assert_eq!(config.corpora.len(), 4);
/// assert_eq!(config.corpora[0].name, "Tanakh");
/// assert_eq!(config.canon().len(), 39);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Base directory the corpus files are resolved against.
    pub texts_dir: PathBuf,
    /// SQLite database file.
    pub database: PathBuf,
    /// Corpora to load, in load order.
    pub corpora: Vec<CorpusConfig>,
    /// Book names classified as Old Testament by the classified layout.
    pub old_testament_books: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            texts_dir: PathBuf::from(DEFAULT_TEXTS_DIR),
            database: PathBuf::from(DEFAULT_DATABASE),
            corpora: default_corpora(),
            old_testament_books: CANONICAL_OT_BOOKS.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// The standard corpora in their standard load order.
pub fn default_corpora() -> Vec<CorpusConfig> {
    vec![
        CorpusConfig::new(
            "Tanakh",
            "tanakh.json",
            CorpusFormat::Interleaved {
                hebrew: Source::TanakhHebrew,
                english: Source::TanakhEnglish,
            },
        ),
        CorpusConfig::new(
            "Septuagint",
            "septuagint.json",
            CorpusFormat::Numbered {
                source: Source::Septuagint,
            },
        ),
        CorpusConfig::new(
            "Textus Receptus",
            "textus_receptus.json",
            CorpusFormat::BookList {
                source: Source::TextusReceptus,
            },
        ),
        CorpusConfig::new(
            "KJV",
            "kjv.json",
            CorpusFormat::Classified {
                source: Source::Kjv,
            },
        ),
    ]
}

impl LoaderConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::IoError`] if the file cannot be read, or
    /// [`LoadError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::IoError`] if the file cannot be written, or
    /// [`LoadError::YamlError`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| LoadError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Builds the Old Testament canon from [`old_testament_books`](Self::old_testament_books).
    pub fn canon(&self) -> Canon {
        Canon::new(self.old_testament_books.iter().cloned())
    }

    /// Full path of a corpus file.
    pub fn corpus_path(&self, corpus: &CorpusConfig) -> PathBuf {
        self.texts_dir.join(&corpus.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corpus_order() {
        let names: Vec<_> = LoaderConfig::default()
            .corpora
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Tanakh", "Septuagint", "Textus Receptus", "KJV"]);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: LoaderConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides_fields() {
        let yaml = r#"
texts_dir: /srv/corpora
corpora:
  - name: Septuagint
    file: lxx.json
    format: numbered
    source: septuagint
"#;
        let config: LoaderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.texts_dir, PathBuf::from("/srv/corpora"));
        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.corpora.len(), 1);
        assert_eq!(
            config.corpora[0].format,
            CorpusFormat::Numbered {
                source: Source::Septuagint
            }
        );
        assert_eq!(
            config.corpus_path(&config.corpora[0]),
            PathBuf::from("/srv/corpora/lxx.json")
        );
        assert_eq!(config.old_testament_books.len(), 39);
    }

    #[test]
    fn test_custom_canon() {
        let yaml = r#"
old_testament_books: [Genesis, Tobit]
"#;
        let config: LoaderConfig = serde_yaml::from_str(yaml).unwrap();
        let canon = config.canon();
        assert!(canon.is_old_testament("Tobit"));
        assert!(!canon.is_old_testament("Psalms"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let yaml = r#"
corpora:
  - name: Vulgate
    file: vulgate.json
    format: xml
    source: kjv
"#;
        assert!(serde_yaml::from_str::<LoaderConfig>(yaml).is_err());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.yml");

        let mut original = LoaderConfig::default();
        original.database = PathBuf::from("verses.db");
        original.save(&path).unwrap();

        let loaded = LoaderConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LoaderConfig::load("/nonexistent/loader.yml").unwrap_err();
        assert!(matches!(err, LoadError::IoError { .. }));
    }
}
