use std::borrow::Cow;

mod word;
pub use word::{ParseWordError, Word};

mod guess;
pub use guess::{Guess, LetterState};

/// Renders game state as rows of colored-square tiles for the overlay.
pub trait AsTiles {
    fn as_tiles(&self) -> Cow<str>;

    /// Tiles with the guessed letters above them.
    fn tiles_with_letters(&self) -> String {
        self.as_tiles().into()
    }
}

impl AsTiles for [Guess] {
    fn as_tiles(&self) -> Cow<str> {
        self.iter()
            .map(|guess| guess.as_tiles())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }

    fn tiles_with_letters(&self) -> String {
        self.iter()
            .map(|guess| guess.tiles_with_letters())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
