//! Old Testament book canon used for testament classification.

use std::collections::HashSet;

use crate::types::Testament;

/// The 39 Old Testament book names, in canonical order.
pub const CANONICAL_OT_BOOKS: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// Set of book names classified as Old Testament.
///
/// Any book outside the set is classified as New Testament. Matching is
/// exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use scripture_core::{Canon, Testament};
///
/// let canon = Canon::default();
/// assert_eq!(canon.testament_of("Psalms"), Testament::Old);
/// assert_eq!(canon.testament_of("Matthew"), Testament::New);
///
/// let custom = Canon::new(["Genesis", "Tobit"]);
/// assert_eq!(custom.testament_of("Tobit"), Testament::Old);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canon {
    old_testament: HashSet<String>,
}

impl Canon {
    /// Creates a canon from an explicit list of Old Testament book names.
    pub fn new<I, S>(old_testament_books: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            old_testament: old_testament_books.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `book` is an Old Testament book in this canon.
    pub fn is_old_testament(&self, book: &str) -> bool {
        self.old_testament.contains(book)
    }

    /// Classifies `book` by membership in the Old Testament set.
    pub fn testament_of(&self, book: &str) -> Testament {
        if self.is_old_testament(book) {
            Testament::Old
        } else {
            Testament::New
        }
    }

    /// Number of Old Testament books in this canon.
    pub fn len(&self) -> usize {
        self.old_testament.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_testament.is_empty()
    }
}

impl Default for Canon {
    fn default() -> Self {
        Self::new(CANONICAL_OT_BOOKS)
    }
}
