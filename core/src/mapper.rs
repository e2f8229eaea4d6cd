//! Source-specific corpus mappers.
//!
//! Each supported JSON layout has a [`CorpusFormat`] variant, and
//! [`map_document`] walks a document in that layout and produces one
//! [`VerseRecord`] per leaf verse, in document order.
//!
//! # Layouts
//!
//! - **Interleaved** — `book → chapter → [entry]` where each entry carries
//!   either a `verse_he` or a `verse_en` string. Produces two source
//!   streams. Verse numbers come from a per-chapter counter, not the data.
//! - **Numbered** — `book → chapter → {verse → text}`, always Old Testament.
//! - **Book list** — `{"books": [{"name", "chapters": [{"chapter",
//!   "verses": [{"verse", "text"}]}]}]}`, always New Testament.
//! - **Classified** — same shape as numbered, but the testament comes from
//!   the [`Canon`].
//!
//! # Example
//!
//! ```
//! use scripture_core::{map_document, Canon, CorpusFormat, Source, Testament};
//!
//! let json = r#"{"Genesis": {"1": {"1": "In the beginning..."}}}"#;
//! let format = CorpusFormat::Numbered { source: Source::Septuagint };
//! let mapped = map_document(&format, json, &Canon::default()).unwrap();
//!
//! assert_eq!(mapped.records.len(), 1);
//! assert_eq!(mapped.records[0].testament, Testament::Old);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::canon::Canon;
use crate::error::{MapError, Result};
use crate::types::{Source, Testament, VerseRecord};

/// Entry key holding Hebrew text in the interleaved layout.
pub const HEBREW_KEY: &str = "verse_he";
/// Entry key holding English text in the interleaved layout.
pub const ENGLISH_KEY: &str = "verse_en";

/// On-disk JSON layout of a corpus, with the source tags it is stored under.
///
/// Serialized with an internal `format` tag so it can be written in the
/// loader configuration:
///
/// ```yaml
/// format: interleaved
/// hebrew: tanakh_hebrew
/// english: tanakh_english
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum CorpusFormat {
    /// Combined Hebrew/English layout split into two source streams.
    Interleaved { hebrew: Source, english: Source },
    /// Directly numbered Old Testament layout.
    Numbered { source: Source },
    /// Nested book/chapter/verse lists, New Testament.
    BookList { source: Source },
    /// Numbered layout covering both testaments, classified by book name.
    Classified { source: Source },
}

impl CorpusFormat {
    /// Source tags this format writes records under.
    pub fn sources(&self) -> Vec<Source> {
        match *self {
            CorpusFormat::Interleaved { hebrew, english } => vec![hebrew, english],
            CorpusFormat::Numbered { source }
            | CorpusFormat::BookList { source }
            | CorpusFormat::Classified { source } => vec![source],
        }
    }
}

/// Records produced from one corpus document.
#[derive(Debug, Clone, Default)]
pub struct MappedCorpus {
    /// Records in document order.
    pub records: Vec<VerseRecord>,
    /// Verses dropped because their text was empty after trimming.
    pub skipped_empty: usize,
}

impl MappedCorpus {
    fn push(&mut self, record: VerseRecord) {
        if record.text.is_empty() {
            warn!(
                source = %record.source,
                book = %record.book,
                chapter = record.chapter,
                verse = record.verse,
                "Skipping verse with empty text"
            );
            self.skipped_empty += 1;
            return;
        }
        self.records.push(record);
    }
}

/// Maps a JSON document in the given layout into verse records.
///
/// The whole document is parsed before any record is produced, so an error
/// means no records at all.
///
/// # Errors
///
/// Returns [`MapError::JsonError`] for invalid JSON,
/// [`MapError::UnexpectedShape`] when a value has the wrong JSON type, and
/// [`MapError::InvalidNumber`] when a chapter or verse key is not a
/// positive integer.
pub fn map_document(format: &CorpusFormat, json: &str, canon: &Canon) -> Result<MappedCorpus> {
    let mut mapped = MappedCorpus::default();

    match *format {
        CorpusFormat::Interleaved { hebrew, english } => {
            let document: Value = serde_json::from_str(json)?;
            map_interleaved(&document, hebrew, english, &mut mapped)?;
        }
        CorpusFormat::Numbered { source } => {
            let document: Value = serde_json::from_str(json)?;
            map_numbered(&document, source, |_| Testament::Old, &mut mapped)?;
        }
        CorpusFormat::BookList { source } => {
            let document: BookListDocument = serde_json::from_str(json)?;
            map_book_list(document, source, &mut mapped);
        }
        CorpusFormat::Classified { source } => {
            let document: Value = serde_json::from_str(json)?;
            map_numbered(&document, source, |book| canon.testament_of(book), &mut mapped)?;
        }
    }

    debug!(
        format = ?format,
        records = mapped.records.len(),
        skipped_empty = mapped.skipped_empty,
        "Mapped corpus document"
    );
    Ok(mapped)
}

/// Walks the interleaved Hebrew/English layout.
///
/// The per-chapter counter starts at 1. A Hebrew entry is stored at the
/// current value; an English entry is stored at the current value and then
/// advances it. An entry holding both keys counts as Hebrew, and an entry
/// holding neither is ignored.
fn map_interleaved(
    document: &Value,
    hebrew: Source,
    english: Source,
    mapped: &mut MappedCorpus,
) -> Result<()> {
    for (book, chapters) in object_at(document, "", "an object of books")? {
        for (chapter_key, entries) in object_at(chapters, book, "an object of chapters")? {
            let chapter_path = format!("{book}/{chapter_key}");
            let chapter = parse_number(chapter_key, &chapter_path)?;
            let entries = entries.as_array().ok_or_else(|| MapError::UnexpectedShape {
                path: chapter_path.clone(),
                expected: "a list of verse entries",
            })?;

            let mut verse = 1;
            for (index, entry) in entries.iter().enumerate() {
                let entry_path = format!("{chapter_path}/{index}");
                let entry = object_at(entry, &entry_path, "a verse entry object")?;

                if let Some(text) = entry.get(HEBREW_KEY) {
                    let text = str_at(text, &entry_path)?;
                    mapped.push(VerseRecord::new(
                        hebrew,
                        Testament::Old,
                        book.as_str(),
                        chapter,
                        verse,
                        text,
                    ));
                } else if let Some(text) = entry.get(ENGLISH_KEY) {
                    let text = str_at(text, &entry_path)?;
                    mapped.push(VerseRecord::new(
                        english,
                        Testament::Old,
                        book.as_str(),
                        chapter,
                        verse,
                        text,
                    ));
                    verse += 1;
                }
            }
        }
    }
    Ok(())
}

/// Walks `book → chapter → {verse → text}`, with the testament decided per book.
fn map_numbered<F>(
    document: &Value,
    source: Source,
    testament_of: F,
    mapped: &mut MappedCorpus,
) -> Result<()>
where
    F: Fn(&str) -> Testament,
{
    for (book, chapters) in object_at(document, "", "an object of books")? {
        let testament = testament_of(book.as_str());

        for (chapter_key, verses) in object_at(chapters, book, "an object of chapters")? {
            let chapter_path = format!("{book}/{chapter_key}");
            let chapter = parse_number(chapter_key, &chapter_path)?;

            for (verse_key, text) in object_at(verses, &chapter_path, "an object of verses")? {
                let verse_path = format!("{chapter_path}/{verse_key}");
                let verse = parse_number(verse_key, &verse_path)?;
                let text = str_at(text, &verse_path)?;
                mapped.push(VerseRecord::new(
                    source,
                    testament,
                    book.as_str(),
                    chapter,
                    verse,
                    text,
                ));
            }
        }
    }
    Ok(())
}

fn map_book_list(document: BookListDocument, source: Source, mapped: &mut MappedCorpus) {
    for book in document.books {
        for chapter in book.chapters {
            for verse in chapter.verses {
                mapped.push(VerseRecord::new(
                    source,
                    Testament::New,
                    book.name.as_str(),
                    chapter.chapter,
                    verse.verse,
                    &verse.text,
                ));
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookListDocument {
    books: Vec<ListedBook>,
}

#[derive(Debug, Deserialize)]
struct ListedBook {
    name: String,
    chapters: Vec<ListedChapter>,
}

#[derive(Debug, Deserialize)]
struct ListedChapter {
    #[serde(alias = "number", deserialize_with = "positive_number")]
    chapter: u32,
    verses: Vec<ListedVerse>,
}

#[derive(Debug, Deserialize)]
struct ListedVerse {
    #[serde(alias = "number", deserialize_with = "positive_number")]
    verse: u32,
    text: String,
}

/// Accepts a positive integer written either as a JSON number or a string.
fn positive_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    let raw = Raw::deserialize(deserializer)?;
    let parsed = match &raw {
        Raw::Number(n) => u32::try_from(*n).ok(),
        Raw::Text(s) => s.trim().parse::<u32>().ok(),
    };
    match parsed {
        Some(n) if n >= 1 => Ok(n),
        _ => Err(serde::de::Error::custom(format!(
            "expected a positive integer, found {raw:?}"
        ))),
    }
}

fn object_at<'a>(
    value: &'a Value,
    path: &str,
    expected: &'static str,
) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| MapError::UnexpectedShape {
        path: display_path(path),
        expected,
    })
}

fn str_at<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| MapError::UnexpectedShape {
        path: display_path(path),
        expected: "a verse text string",
    })
}

fn parse_number(key: &str, path: &str) -> Result<u32> {
    match key.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(MapError::InvalidNumber {
            path: display_path(path),
            value: key.to_string(),
        }),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
