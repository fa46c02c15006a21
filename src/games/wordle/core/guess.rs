use std::{
    borrow::Cow,
    ops::{Index, IndexMut},
};

use super::AsTiles;

/// One committed attempt: the guessed letters paired with their verdicts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<(char, LetterState)>,
}

impl Guess {
    pub fn new(word: &str) -> Self {
        let letters = word
            .to_lowercase()
            .chars()
            .map(|ch: char| (ch, LetterState::Absent))
            .collect::<Vec<(char, LetterState)>>();

        Self { letters }
    }

    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|(_, state)| *state == LetterState::Correct)
    }

    pub fn word(&self) -> String {
        self.letters.iter().map(|(ch, _)| *ch).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, LetterState)> + '_ {
        self.letters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (char, LetterState)> + '_ {
        self.letters.iter_mut()
    }
}

impl AsTiles for Guess {
    fn as_tiles(&self) -> Cow<str> {
        self.letters
            .iter()
            .map(|(_, state)| state.as_tiles())
            .collect::<String>()
            .into()
    }

    fn tiles_with_letters(&self) -> String {
        let (letters, tiles) = self.letters.iter().fold(
            (String::new(), String::new()),
            |(letters, tiles), (letter, state)| {
                (
                    letters + " " + &letter.to_uppercase().to_string(),
                    tiles + " " + &state.as_tiles(),
                )
            },
        );

        letters.trim().to_owned() + "\n" + tiles.trim()
    }
}

impl IntoIterator for Guess {
    type Item = (char, LetterState);
    type IntoIter = std::vec::IntoIter<(char, LetterState)>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

impl Index<usize> for Guess {
    type Output = (char, LetterState);

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}

impl IndexMut<usize> for Guess {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.letters.index_mut(index)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, state) in &self.letters {
            write!(f, "{state}")?;
        }

        Ok(())
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}

/// Per-letter verdict. `Correct` is the right letter in the right slot,
/// `Present` the right letter in the wrong slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    #[default]
    Absent,
    Present,
    Correct,
}

impl AsTiles for LetterState {
    fn as_tiles(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",
            Self::Present => "🟨",
            Self::Absent => "⬛",
        }
        .into()
    }
}

impl std::fmt::Display for LetterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Correct => "O",
            Self::Present => "o",
            Self::Absent => ".",
        })
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;

    use super::LetterState;

    macro_rules! string_match {
        ($($word:ident, $guess:ident => $result:expr;)+) => {
            use std::str::FromStr;

            paste! {
                $(
                    #[test]
                    fn [<$word _ $guess>]() {
                        let word = super::super::Word::from_str(&stringify!($word)).unwrap();
                        let guess = word.guess(&stringify!($guess));
                        pretty_assertions::assert_eq!(
                            guess, $result
                        )
                    }
                )+
            }
        };
    }

    string_match! {
        beras, beras => "OOOOO";
        beras, abres => "ooOoO";
        lolos, solos => ".OOOO";
        lolos, losos => "OO.OO";
        salak, lalat => ".OOO.";
        salak, kakak => ".O.OO";
        gelas, besar => ".OoO.";
        dapur, padat => "oOo..";
        mandi, minum => "OoO..";
        tanah, hutan => "o.oOo";
        kapal, lampu => "oO.o.";
        rumah, murah => "oOoOO";
        pagar, gagap => ".OOOo";
    }

    #[test]
    fn counts_never_exceed_answer() {
        use std::str::FromStr;

        let answers = ["lolos", "salak", "beras", "kakak", "rumah"];
        let guesses = ["solos", "lalat", "abres", "kapak", "murah"];

        for answer in answers {
            let word = super::super::Word::from_str(answer).unwrap();

            for guessed in guesses {
                let guess = word.guess(guessed);

                for ch in 'a'..='z' {
                    let marked = guess
                        .iter()
                        .filter(|(letter, state)| *letter == ch && *state != LetterState::Absent)
                        .count();
                    let available = answer.chars().filter(|&c| c == ch).count();

                    assert!(
                        marked <= available,
                        "{guessed} vs {answer}: {marked} marks for '{ch}' but answer has {available}"
                    );
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        use std::str::FromStr;

        let word = super::super::Word::from_str("lolos").unwrap();

        let first = word.guess("solos");
        for _ in 0..10 {
            pretty_assertions::assert_eq!(word.guess("solos"), first);
        }
    }
}
