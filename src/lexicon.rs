//! Lexicon maps words to their definitions and lexicon membership markers.
//! It is read once at startup from records like `MUZJIKS+$,'MUZJIK, a
//! Russian peasant [n]'` and shared by every replay.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::error::GcgError;

/// Markers that may trail a word to flag lexicon membership.
const MARKERS: [char; 4] = ['+', '#', 'x', '$'];

#[derive(Debug, Clone, Default)]
struct Entry {
    definition: String,
    markers: String,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Entry>,
}

impl Lexicon {
    /// `parse` reads one record per line. Blank lines are skipped; a line
    /// without a comma is an error.
    pub fn parse(contents: &str) -> Result<Lexicon, GcgError> {
        let mut entries = HashMap::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            let (raw_word, definition) =
                line.trim()
                    .split_once(',')
                    .ok_or_else(|| GcgError::Definition {
                        line: line.to_string(),
                    })?;

            let raw_word = raw_word.trim();
            let word = raw_word.trim_end_matches(MARKERS);
            let markers = &raw_word[word.len()..];

            // Drop the surrounding quotes.
            let definition = definition.trim();
            let mut chars = definition.chars();
            chars.next();
            chars.next_back();

            entries.insert(
                word.to_uppercase(),
                Entry {
                    definition: chars.as_str().to_string(),
                    markers: markers.to_string(),
                },
            );
        }
        Ok(Lexicon { entries })
    }

    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Lexicon> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .context(format!("Error reading lexicon {}", path.display()))?;
        Lexicon::parse(&contents).context(format!("Error parsing lexicon {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `definition` returns the definition of an uppercase word, or an empty
    /// string if it is not listed.
    pub fn definition(&self, word: &str) -> &str {
        self.entries
            .get(word)
            .map(|e| e.definition.as_str())
            .unwrap_or_default()
    }

    /// `markers` returns the lexicon markers of an uppercase word, e.g. `+$`.
    pub fn markers(&self, word: &str) -> &str {
        self.entries
            .get(word)
            .map(|e| e.markers.as_str())
            .unwrap_or_default()
    }
}
