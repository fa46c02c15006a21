use std::{collections::HashMap, ops::Index, str::FromStr};

use thiserror::Error;
use tracing::trace;

use crate::games::wordle::WORD_LEN;

use super::guess::{Guess, LetterState};

/// A vocabulary word, stored lowercase with a per-letter occurrence count
/// so duplicate letters can be consumed during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    letters: Vec<char>,
    letter_counts: HashMap<char, usize>,
}

impl Word {
    /// Evaluates `word` against this answer. Two passes: exact positions
    /// first, then leftover letters in the wrong place, each consuming
    /// from the answer's letter counts so no letter is marked more times
    /// than it occurs.
    pub fn guess(&self, word: &str) -> Guess {
        let mut guess = Guess::new(word);
        trace!(word, answer = %self, "evaluating");

        let mut letter_counts = self.letter_counts.clone();

        for (index, (letter, state)) in guess.iter_mut().enumerate() {
            if self[index] == *letter {
                *state = LetterState::Correct;
                let count = letter_counts.get_mut(letter).expect("word has letter");
                *count = count.saturating_sub(1);
            }
        }

        for (letter, state) in guess.iter_mut() {
            if *state != LetterState::Correct
                && letter_counts.get(letter).is_some_and(|count| *count > 0)
            {
                *state = LetterState::Present;
                *letter_counts.get_mut(letter).expect("word has letter") -= 1;
            }
        }

        guess
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word `{0}` must have {WORD_LEN} letters but has {}", .0.chars().count())]
    Length(String),

    #[error("word `{0}` has non-alphabetic characters")]
    NotAlphabetic(String),
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != WORD_LEN {
            return Err(ParseWordError::Length(s.to_owned()));
        }

        if !s.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ParseWordError::NotAlphabetic(s.to_owned()));
        }

        let letters = s.to_lowercase().chars().collect::<Vec<char>>();

        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for letter in letters.iter() {
            if let Some(count) = letter_counts.get_mut(letter) {
                *count += 1;
            } else {
                letter_counts.insert(*letter, 1);
            }
        }

        Ok(Self {
            letters,
            letter_counts,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl IntoIterator for Word {
    type Item = char;
    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::{ParseWordError, Word};

    #[test]
    fn parse_normalizes_case() {
        let word = Word::from_str("BeRaS").unwrap();
        assert_eq!(word.to_string(), "beras");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Word::from_str("kata"),
            Err(ParseWordError::Length("kata".to_owned()))
        );
        assert_eq!(
            Word::from_str("kataku"),
            Err(ParseWordError::Length("kataku".to_owned()))
        );
    }

    #[test]
    fn parse_rejects_non_alphabetic() {
        assert_eq!(
            Word::from_str("ka-ta"),
            Err(ParseWordError::NotAlphabetic("ka-ta".to_owned()))
        );
    }

    #[test]
    fn guessing_the_answer_is_all_correct() {
        let word = Word::from_str("lolos").unwrap();
        assert!(word.guess("lolos").is_correct());
        assert!(word.guess("LOLOS").is_correct());
    }
}
