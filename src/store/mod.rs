//! Persistent phrase store
//!
//! A thin wrapper around a SQLite database holding one table of greeting
//! phrases, seeded once from the bundled dataset and read-only afterwards.

pub mod seed;

pub use seed::*;

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::Path;

/// One row of the phrase table. The surrogate id is used only for stable
/// ordering of the random draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRecord {
    pub id: i64,
    pub language: String,
    pub phrase: String,
}

/// A phrase staged for insertion (no id yet)
#[derive(Debug, Clone)]
pub struct NewPhrase {
    pub language: String,
    pub phrase: String,
}

/// Handle to the SQLite phrase store
pub struct PhraseStore {
    conn: Connection,
}

impl PhraseStore {
    /// Open (creating if necessary) the store at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS hello (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                language TEXT NOT NULL,
                phrase TEXT NOT NULL
            )",
            [],
        )?;

        Ok(PhraseStore { conn })
    }

    /// Number of phrases in the store
    pub fn count(&self) -> rusqlite::Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM hello", [], |row| row.get(0))
    }

    /// First phrase matching the given language exactly (case-sensitive)
    pub fn find_by_language(&self, language: &str) -> rusqlite::Result<Option<PhraseRecord>> {
        self.conn
            .query_row(
                "SELECT id, language, phrase FROM hello
                 WHERE language = ?1 ORDER BY id LIMIT 1",
                [language],
                |row| {
                    Ok(PhraseRecord {
                        id: row.get(0)?,
                        language: row.get(1)?,
                        phrase: row.get(2)?,
                    })
                },
            )
            .optional()
    }

    /// Phrase at the given offset in surrogate-id order
    pub fn nth(&self, offset: i64) -> rusqlite::Result<Option<PhraseRecord>> {
        self.conn
            .query_row(
                "SELECT id, language, phrase FROM hello
                 ORDER BY id LIMIT 1 OFFSET ?1",
                [offset],
                |row| {
                    Ok(PhraseRecord {
                        id: row.get(0)?,
                        language: row.get(1)?,
                        phrase: row.get(2)?,
                    })
                },
            )
            .optional()
    }

    /// Insert phrases one at a time inside a single transaction, invoking
    /// the observer after each staged insertion. Nothing is persisted until
    /// every row has been staged.
    pub fn insert_many<F>(&mut self, phrases: &[NewPhrase], mut after_each: F) -> rusqlite::Result<usize>
    where
        F: FnMut(usize),
    {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO hello (language, phrase) VALUES (?1, ?2)")?;
            for (index, phrase) in phrases.iter().enumerate() {
                stmt.execute([phrase.language.as_str(), phrase.phrase.as_str()])?;
                after_each(index + 1);
            }
        }
        tx.commit()?;

        Ok(phrases.len())
    }
}
