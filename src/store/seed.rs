//! One-time bulk import of the bundled phrase dataset
//!
//! The seeder deserializes the whole dataset up front, then stages rows one
//! at a time behind a progress bar and commits them as a single batch. It
//! does not check whether the store is already populated; "call only when
//! empty" is the caller's contract, and calling it twice duplicates rows.

use crate::error::{Result, SeedError};
use crate::store::{NewPhrase, PhraseStore};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// One dataset entry, matching the bundled JSON shape
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPhrase {
    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "HelloPhrase")]
    pub phrase: String,
}

/// Imports the bundled dataset into a phrase store
pub struct Seeder {
    dataset_path: PathBuf,
}

impl Seeder {
    /// Create a seeder for the given dataset file
    pub fn new(dataset_path: PathBuf) -> Self {
        Seeder { dataset_path }
    }

    /// Read and deserialize the entire dataset
    pub fn load_dataset(&self) -> std::result::Result<Vec<SeedPhrase>, SeedError> {
        let contents = fs::read_to_string(&self.dataset_path).map_err(|e| SeedError::Missing {
            path: self.dataset_path.clone(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| SeedError::Malformed {
            path: self.dataset_path.clone(),
            source: e,
        })
    }

    /// Import every dataset row into the store, advancing a progress bar
    /// between insertions. Returns the number of rows imported.
    pub fn seed(&self, store: &mut PhraseStore) -> Result<usize> {
        let rows = self.load_dataset()?;

        let bar = ProgressBar::new(rows.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        {
            bar.set_style(style);
        }
        bar.set_message("Importing data");

        let phrases: Vec<NewPhrase> = rows
            .into_iter()
            .map(|row| NewPhrase {
                language: row.language,
                phrase: row.phrase,
            })
            .collect();

        let inserted = store.insert_many(&phrases, |_| bar.inc(1))?;
        bar.finish_and_clear();

        Ok(inserted)
    }
}
