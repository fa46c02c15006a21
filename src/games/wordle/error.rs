use thiserror::Error;

/// Recoverable, per-submission failures. The board and cursor are left
/// untouched so the player can immediately retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("a guess needs {} letters", super::WORD_LEN)]
    Incomplete,

    #[error("`{0}` is not in the words list")]
    NotInList(String),
}

/// Boot-time failures from the words list. `Empty` is fatal: no round can
/// start without a vocabulary.
#[derive(Debug, Error)]
pub enum WordsError {
    #[error("words list has no usable {}-letter words", super::WORD_LEN)]
    Empty,

    #[error("failed to read words list: {0}")]
    Io(#[from] std::io::Error),
}
