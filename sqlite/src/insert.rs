//! The single write path into the verse table.
//!
//! Every corpus goes through [`insert_verse`], so trimming and
//! first-writer-wins deduplication behave the same regardless of which
//! layout a record came from. A record whose `(source, book, chapter,
//! verse)` already exists is ignored, not reported as an error.

use rusqlite::{Connection, params};
use scripture_core::VerseRecord;

use crate::error::Result;

const INSERT_VERSE_SQL: &str = "INSERT OR IGNORE INTO verses \
     (source, testament, book, chapter, verse, text) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Inserts one verse, trimming its text.
///
/// Returns `true` if a row was written and `false` if the reference was
/// already present (the existing row is left untouched).
pub fn insert_verse(conn: &Connection, record: &VerseRecord) -> Result<bool> {
    let mut stmt = conn.prepare_cached(INSERT_VERSE_SQL)?;
    let changed = stmt.execute(params![
        record.source.as_str(),
        record.testament.as_str(),
        record.book,
        record.chapter,
        record.verse,
        record.text.trim(),
    ])?;
    Ok(changed > 0)
}

/// Rows written vs ignored by a batch of inserts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertCounts {
    pub inserted: usize,
    pub ignored: usize,
}

/// Inserts records in order through [`insert_verse`].
pub fn insert_verses(conn: &Connection, records: &[VerseRecord]) -> Result<InsertCounts> {
    let mut counts = InsertCounts::default();
    for record in records {
        if insert_verse(conn, record)? {
            counts.inserted += 1;
        } else {
            counts.ignored += 1;
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use scripture_core::{Source, Testament};

    use super::*;
    use crate::schema::SCHEMA_SQL;

    fn store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        conn
    }

    fn genesis_1_1(text: &str) -> VerseRecord {
        VerseRecord::new(Source::Kjv, Testament::Old, "Genesis", 1, 1, text)
    }

    fn texts(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("SELECT text FROM verses ORDER BY id").unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_duplicate_insert_keeps_first_text() {
        let conn = store();
        assert!(insert_verse(&conn, &genesis_1_1("first")).unwrap());
        assert!(!insert_verse(&conn, &genesis_1_1("second")).unwrap());
        assert_eq!(texts(&conn), vec!["first"]);
    }

    #[test]
    fn test_insert_trims_text() {
        let conn = store();
        // Built without the constructor so the text reaches the insert untrimmed.
        let record = VerseRecord {
            text: "  Hello world  \n".to_string(),
            ..genesis_1_1("")
        };
        insert_verse(&conn, &record).unwrap();
        assert_eq!(texts(&conn), vec!["Hello world"]);
    }

    #[test]
    fn test_insert_stores_all_columns() {
        let conn = store();
        let record = VerseRecord::new(
            Source::TextusReceptus,
            Testament::New,
            "John",
            3,
            16,
            "Οὕτως γὰρ ἠγάπησεν ὁ θεὸς τὸν κόσμον",
        );
        insert_verse(&conn, &record).unwrap();

        let row: (String, String, String, u32, u32) = conn
            .query_row(
                "SELECT source, testament, book, chapter, verse FROM verses",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
            )
            .unwrap();
        assert_eq!(
            row,
            (
                "textus_receptus".to_string(),
                "NT".to_string(),
                "John".to_string(),
                3,
                16
            )
        );
    }

    #[test]
    fn test_insert_verses_counts() {
        let conn = store();
        let records = vec![
            genesis_1_1("a"),
            genesis_1_1("b"),
            VerseRecord::new(Source::Kjv, Testament::Old, "Genesis", 1, 2, "c"),
        ];
        let counts = insert_verses(&conn, &records).unwrap();
        assert_eq!(
            counts,
            InsertCounts {
                inserted: 2,
                ignored: 1
            }
        );
    }

    #[test]
    fn test_insert_without_table_fails() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(insert_verse(&conn, &genesis_1_1("x")).is_err());
    }
}
