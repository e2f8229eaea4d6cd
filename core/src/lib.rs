//! Core types and corpus mappers for scripture ingestion.
//!
//! This crate defines the canonical data model every corpus is normalized
//! into, and the mappers that turn each supported JSON layout into that
//! model:
//!
//! - [`VerseRecord`] — one normalized verse, keyed by
//!   `(source, book, chapter, verse)`.
//! - [`Source`] / [`Testament`] — the tags stored with every verse.
//! - [`Canon`] — the Old Testament book set used to classify books.
//! - [`CorpusFormat`] and [`map_document`] — the source-specific mappers.
//!
//! Mapping is pure: it never touches storage. Writing records is the job of
//! the `scripture-sqlite` crate.
//!
//! # Example
//!
//! ```
//! use scripture_core::*;
//!
//! let json = r#"{
//!     "Psalms": {"23": {"1": "The LORD is my shepherd; I shall not want."}},
//!     "Matthew": {"1": {"1": "The book of the generation of Jesus Christ"}}
//! }"#;
//! let format = CorpusFormat::Classified { source: Source::Kjv };
//! let mapped = map_document(&format, json, &Canon::default()).unwrap();
//!
//! assert_eq!(mapped.records[0].testament, Testament::Old);
//! assert_eq!(mapped.records[1].testament, Testament::New);
//! ```

mod canon;
mod error;
mod mapper;
mod types;

pub use canon::{CANONICAL_OT_BOOKS, Canon};
pub use error::{MapError, Result};
pub use mapper::{CorpusFormat, ENGLISH_KEY, HEBREW_KEY, MappedCorpus, map_document};
pub use types::{Source, Testament, VerseRecord};
