use thiserror::Error;

use crate::{framework::config, games::wordle::WordsError};

/// Everything that can stop the overlay from booting. Once the event loop
/// is running, failures are handled where they happen: bad guesses become
/// status messages and feed hiccups are retried on the next poll.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::Error),

    #[error("words list error: {0}")]
    Words(#[from] WordsError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
