use std::{collections::HashSet, path::Path, str::FromStr};

use rand::seq::IteratorRandom;
use tracing::debug;

use super::{core::Word, error::WordsError, WORD_LEN};

/// The validated vocabulary. Built once at boot, read-only afterwards.
#[derive(Debug, Clone)]
pub struct WordsList {
    words: HashSet<String>,
}

impl WordsList {
    /// Reads a newline-delimited words file, one word per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordsError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let list = Self::parse(&text)?;

        debug!(path = %path.as_ref().display(), words = list.len(), "loaded words list");

        Ok(list)
    }

    /// Trims, lowercases and deduplicates entries, keeping only those with
    /// exactly [`WORD_LEN`] ASCII letters. Fails if nothing survives.
    pub fn parse(text: &str) -> Result<Self, WordsError> {
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| {
                word.chars().count() == WORD_LEN && word.chars().all(|ch| ch.is_ascii_alphabetic())
            })
            .collect::<HashSet<String>>();

        if words.is_empty() {
            return Err(WordsError::Empty);
        }

        Ok(Self { words })
    }

    pub fn random_answer(&self) -> Word {
        let word = self
            .words
            .iter()
            .choose(&mut rand::thread_rng())
            .expect("list should not be empty by construction");

        Word::from_str(word).expect("list should contain only valid words")
    }

    pub fn valid_guess(&self, guess: &str) -> bool {
        self.words.contains(&guess.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
