//! Canonical verse record types.
//!
//! Every corpus, whatever its on-disk JSON layout, is normalized into
//! [`VerseRecord`] values before it reaches storage. The enums here are
//! stored as plain strings, so their `as_str` forms are part of the
//! persisted format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which corpus a verse came from.
///
/// # Examples
///
/// ```
/// use scripture_core::Source;
///
/// assert_eq!(Source::TanakhHebrew.as_str(), "tanakh_hebrew");
/// assert_eq!(Source::Kjv.to_string(), "kjv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// King James Version (English, both testaments).
    Kjv,
    /// Hebrew stream of the combined Tanakh corpus.
    TanakhHebrew,
    /// English stream of the combined Tanakh corpus.
    TanakhEnglish,
    /// Greek Old Testament.
    Septuagint,
    /// Greek New Testament.
    TextusReceptus,
}

impl Source {
    /// All known sources, in storage tag order.
    pub const ALL: [Source; 5] = [
        Source::Kjv,
        Source::TanakhHebrew,
        Source::TanakhEnglish,
        Source::Septuagint,
        Source::TextusReceptus,
    ];

    /// Returns the tag stored in the `source` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Kjv => "kjv",
            Source::TanakhHebrew => "tanakh_hebrew",
            Source::TanakhEnglish => "tanakh_english",
            Source::Septuagint => "septuagint",
            Source::TextusReceptus => "textus_receptus",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse Old/New Testament classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    /// Old Testament, stored as `OT`.
    #[serde(rename = "OT")]
    Old,
    /// New Testament, stored as `NT`.
    #[serde(rename = "NT")]
    New,
}

impl Testament {
    /// Returns the tag stored in the `testament` column (`"OT"` or `"NT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized verse.
///
/// The `(source, book, chapter, verse)` tuple identifies the record; the
/// store keeps the first record written for a tuple and ignores the rest.
///
/// # Examples
///
/// ```
/// use scripture_core::{Source, Testament, VerseRecord};
///
/// let record = VerseRecord::new(
///     Source::Kjv,
///     Testament::Old,
///     "Genesis",
///     1,
///     1,
///     "  In the beginning God created the heaven and the earth.\n",
/// );
/// assert_eq!(record.text, "In the beginning God created the heaven and the earth.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub source: Source,
    pub testament: Testament,
    pub book: String,
    /// 1-based chapter number.
    pub chapter: u32,
    /// 1-based verse number.
    pub verse: u32,
    /// Verse text with surrounding whitespace removed.
    pub text: String,
}

impl VerseRecord {
    /// Builds a record, trimming surrounding whitespace from `text`.
    pub fn new(
        source: Source,
        testament: Testament,
        book: impl Into<String>,
        chapter: u32,
        verse: u32,
        text: &str,
    ) -> Self {
        Self {
            source,
            testament,
            book: book.into(),
            chapter,
            verse,
            text: text.trim().to_string(),
        }
    }
}
