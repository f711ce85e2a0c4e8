//! The `yo` multilingual phrase lookup command

use crate::cli::{CommandDescriptor, FieldSpec, SettingsModel};
use crate::commands::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::store::{PhraseRecord, PhraseStore, Seeder};
use async_trait::async_trait;
use rand::Rng;
use std::io;
use tracing::{info, warn};

/// Looks up a greeting phrase by language, or picks one at random, seeding
/// the store from the bundled dataset on first use.
pub struct YoCommand;

/// Registration record for `yo`
pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor {
        name: "yo",
        description: "Say hello in multiple languages.",
        examples: vec!["yo --language Afrikaans".to_string()],
        fields: vec![FieldSpec::text("language")
            .short('l')
            .help("The language you want to be greeted in.")],
        handler: Box::new(YoCommand),
    }
}

/// Random skip-based draw over `[1, count)` in surrogate-id order. The
/// lowest-ordered row is unreachable when more than one row exists; this
/// mirrors the historical draw and is flagged rather than corrected. With
/// a single row the range would be empty, so offset 0 is used.
fn random_offset(count: i64) -> i64 {
    if count > 1 {
        rand::rng().random_range(1..count)
    } else {
        0
    }
}

fn select_phrase(
    store: &PhraseStore,
    language: Option<&str>,
) -> rusqlite::Result<Option<PhraseRecord>> {
    match language {
        Some(language) => store.find_by_language(language),
        None => {
            let count = store.count()?;
            store.nth(random_offset(count))
        }
    }
}

#[async_trait]
impl CommandHandler for YoCommand {
    async fn execute(&self, settings: &SettingsModel, ctx: &CommandContext) -> Result<i32> {
        let mut store = ctx.open_store()?;

        // Seed exactly once: the emptiness check happens here, not in the
        // seeder. Concurrent processes may race on this check; accepted
        // for a single-user CLI.
        if store.count()? == 0 {
            let seeder = Seeder::new(ctx.config.seed_data_file.clone());
            let rows = seeder.seed(&mut store)?;
            info!(rows, "seeded phrase store from bundled dataset");
        }

        let language = settings.get_text("language");
        let record = select_phrase(&store, language)?;

        let mut stdout = io::stdout();
        let formatter = ctx.formatter();

        match record {
            Some(record) => {
                formatter.render_raw(
                    &mut stdout,
                    &format!("{} (in {})", record.phrase, record.language),
                )?;
                info!(
                    id = record.id,
                    language = %record.language,
                    phrase = %record.phrase,
                    "phrase lookup matched"
                );
            }
            None => {
                let requested = language.unwrap_or_default();
                formatter.render_raw(
                    &mut stdout,
                    &format!("Sorry, I don't speak {}", formatter.accent(requested)),
                )?;
                warn!(language = %requested, "phrase requested in unknown language");
            }
        }

        // A miss is a normal outcome, not an error.
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewPhrase;

    fn seeded_store() -> PhraseStore {
        let mut store = PhraseStore::open_in_memory().unwrap();
        let phrases = vec![
            NewPhrase {
                language: "English".to_string(),
                phrase: "Hello".to_string(),
            },
            NewPhrase {
                language: "French".to_string(),
                phrase: "Bonjour".to_string(),
            },
            NewPhrase {
                language: "Spanish".to_string(),
                phrase: "Hola".to_string(),
            },
        ];
        store.insert_many(&phrases, |_| {}).unwrap();
        store
    }

    #[test]
    fn test_random_offset_stays_in_range() {
        for _ in 0..100 {
            let offset = random_offset(3);
            assert!((1..3).contains(&offset));
        }
    }

    #[test]
    fn test_random_offset_single_row() {
        assert_eq!(random_offset(1), 0);
        assert_eq!(random_offset(0), 0);
    }

    #[test]
    fn test_select_by_language() {
        let store = seeded_store();
        let record = select_phrase(&store, Some("French")).unwrap().unwrap();
        assert_eq!(record.phrase, "Bonjour");
    }

    #[test]
    fn test_select_unknown_language_is_a_miss() {
        let store = seeded_store();
        assert!(select_phrase(&store, Some("Klingon")).unwrap().is_none());
    }

    #[test]
    fn test_random_selection_always_returns_a_row() {
        let store = seeded_store();
        for _ in 0..50 {
            let record = select_phrase(&store, None).unwrap();
            assert!(record.is_some());
        }
    }

    #[test]
    fn test_random_selection_never_picks_lowest_row() {
        // The [1, count) draw leaves the first row unreachable.
        let store = seeded_store();
        for _ in 0..100 {
            let record = select_phrase(&store, None).unwrap().unwrap();
            assert_ne!(record.language, "English");
        }
    }

    #[test]
    fn test_random_selection_reaches_every_other_row() {
        let store = seeded_store();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let record = select_phrase(&store, None).unwrap().unwrap();
            seen.insert(record.language);
        }
        assert!(seen.contains("French"));
        assert!(seen.contains("Spanish"));
    }
}
