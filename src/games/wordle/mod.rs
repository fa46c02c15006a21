use tracing::{debug, info, trace};

pub mod core;
use self::core::{AsTiles, Guess, Word};

mod error;
pub use error::{GuessError, WordsError};

mod words_list;
pub use words_list::WordsList;

pub const WORD_LEN: usize = 5;
pub const MAX_TRIES: usize = 6;

/// Round lifecycle. `Evaluating` is the locked window inside a submit;
/// everything authoritative happens before control returns to the caller,
/// so reveal animation can lag behind without racing the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AcceptingInput,
    Evaluating,
    Finished,
}

/// What a successful call to [`Round::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The round was locked; the submission was dropped on the floor.
    /// Both input sources are racy relative to reveal timing, so this is
    /// not an error.
    Ignored,
    Wrong,
    Won,
    Lost,
}

impl Submitted {
    pub fn ended_round(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One round of the game: the answer, the committed attempts, the letters
/// typed into the active row, and the lifecycle phase. All mutation goes
/// through the methods here; a fresh `Round` replaces the old one when the
/// scheduler advances.
#[derive(Debug)]
pub struct Round {
    answer: Word,
    guesses: Vec<Guess>,
    pending: Vec<char>,
    phase: Phase,
    number: u64,
    message: String,
}

impl Round {
    pub fn new(answer: Word, number: u64) -> Self {
        debug!(%answer, number, "starting round");

        Self {
            answer,
            guesses: Vec::with_capacity(MAX_TRIES),
            pending: Vec::with_capacity(WORD_LEN),
            phase: Phase::AcceptingInput,
            number,
            message: format!("type {WORD_LEN} letters - live comments count too!"),
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Letters typed into the active row so far.
    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    pub fn active_row(&self) -> usize {
        self.guesses.len()
    }

    pub fn active_col(&self) -> usize {
        self.pending.len()
    }

    /// Appends a letter to the active row. Silently ignored while locked
    /// or when the row is full, since keystrokes race the lock state.
    pub fn type_letter(&mut self, ch: char) {
        if self.phase != Phase::AcceptingInput
            || self.pending.len() >= WORD_LEN
            || !ch.is_ascii_alphabetic()
        {
            return;
        }

        self.pending.push(ch.to_ascii_lowercase());
    }

    pub fn backspace(&mut self) {
        if self.phase != Phase::AcceptingInput {
            return;
        }

        self.pending.pop();
    }

    /// Submits the letters currently in the active row.
    pub fn submit(
        &mut self,
        words: &WordsList,
        source: &str,
    ) -> Result<Submitted, GuessError> {
        if self.phase != Phase::AcceptingInput {
            trace!(source, "submit ignored: round locked");
            return Ok(Submitted::Ignored);
        }

        if self.pending.len() != WORD_LEN {
            self.message = format!("a guess needs {WORD_LEN} letters");
            return Err(GuessError::Incomplete);
        }

        let word = self.pending.iter().collect::<String>();
        self.commit(&word, words, source)
    }

    /// Submits a whole word at once, bypassing per-letter typing. Used by
    /// the feed adapter; guarded to `AcceptingInput` so a comment can never
    /// land in a row another source is still finalizing.
    pub fn submit_direct(
        &mut self,
        word: &str,
        words: &WordsList,
        source: &str,
    ) -> Result<Submitted, GuessError> {
        if self.phase != Phase::AcceptingInput {
            trace!(source, word, "direct guess ignored: round locked");
            return Ok(Submitted::Ignored);
        }

        let word = word.to_lowercase();
        if word.chars().count() != WORD_LEN {
            return Err(GuessError::Incomplete);
        }

        self.commit(&word, words, source)
    }

    /// The single atomic transition: validate, lock, evaluate, decide.
    fn commit(
        &mut self,
        word: &str,
        words: &WordsList,
        source: &str,
    ) -> Result<Submitted, GuessError> {
        if !words.valid_guess(word) {
            debug!(source, word, "guess not in words list");
            self.message = format!("\"{word}\" is not in the words list");
            return Err(GuessError::NotInList(word.to_owned()));
        }

        self.phase = Phase::Evaluating;

        let guess = self.answer.guess(word);
        let correct = guess.is_correct();
        self.guesses.push(guess);
        self.pending.clear();

        let submitted = if correct {
            info!(source, word, tries = self.guesses.len(), "round won");
            self.message = format!("correct! ({source})");
            self.phase = Phase::Finished;
            Submitted::Won
        } else if self.guesses.len() == MAX_TRIES {
            info!(source, answer = %self.answer, "round lost");
            self.message = format!("out of tries! the word was: {}", self.answer);
            self.phase = Phase::Finished;
            Submitted::Lost
        } else {
            self.message = format!("wrong, try again ({source})");
            self.phase = Phase::AcceptingInput;
            Submitted::Wrong
        };

        if submitted.ended_round() {
            trace!(board = %self.guesses.as_tiles(), "final board");
        }

        Ok(submitted)
    }
}
