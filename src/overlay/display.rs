use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use tracing::warn;

use crate::games::wordle::{
    core::{AsTiles, Guess},
    Phase, Round, MAX_TRIES, WORD_LEN,
};

/// A point-in-time view of the game, handed to the display after every
/// state-affecting event. Rendering never feeds anything back.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub round: u64,
    pub phase: Phase,
    pub rows: Vec<Guess>,
    pub pending: String,
    pub message: String,
    pub countdown: Option<u64>,
}

impl Snapshot {
    pub fn of(round: &Round, countdown: Option<u64>) -> Self {
        Self {
            round: round.number(),
            phase: round.phase(),
            rows: round.guesses().to_vec(),
            pending: round.pending().iter().collect(),
            message: round.message().to_owned(),
            countdown,
        }
    }

    /// The full board, one line per try: committed rows show letters and
    /// tiles, the active row shows what has been typed so far.
    pub fn board_text(&self) -> String {
        let mut lines = Vec::with_capacity(MAX_TRIES);

        for row in 0..MAX_TRIES {
            lines.push(if let Some(guess) = self.rows.get(row) {
                let letters = guess
                    .word()
                    .to_uppercase()
                    .chars()
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(" ");

                format!("{letters}  {}", guess.as_tiles())
            } else if row == self.rows.len() && self.phase != Phase::Finished {
                let mut slots = self
                    .pending
                    .to_uppercase()
                    .chars()
                    .map(String::from)
                    .collect::<Vec<_>>();
                slots.resize(WORD_LEN, "_".to_owned());

                slots.join(" ")
            } else {
                vec!["·"; WORD_LEN].join(" ")
            });
        }

        lines.join("\n")
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("KATLA LIVE (round {})", self.round), String::new()];
        lines.extend(self.board_text().lines().map(str::to_owned));
        lines.push(String::new());
        lines.push(self.message.clone());

        if let Some(left) = self.countdown {
            lines.push(format!("next round in {left}s"));
        }

        lines
    }
}

/// Where snapshots go. The real overlay draws to the terminal; tests swap
/// in a recorder.
pub trait DisplaySurface {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Minimal terminal renderer: alternate screen, clear and reprint.
#[derive(Debug)]
pub struct TerminalDisplay {
    out: Stdout,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        crossterm::execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { out })
    }

    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

        for line in snapshot.lines() {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }

        self.out.flush()
    }
}

impl DisplaySurface for TerminalDisplay {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Err(err) = self.draw(snapshot) {
            warn!(%err, "failed to draw overlay");
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
