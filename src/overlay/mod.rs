use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::games::wordle::{Round, Submitted, WordsList};

mod event;
pub use event::OverlayEvent;

pub mod display;
use display::{DisplaySurface, Snapshot};

pub mod feed;
pub mod keyboard;

mod scheduler;
pub use scheduler::Scheduler;

/// The one game instance. Owns the words list, the live round and the
/// round scheduler, and is the only place state is mutated: every input
/// source funnels through the event channel and is applied sequentially.
pub struct Overlay<D> {
    words: WordsList,
    round: Round,
    scheduler: Scheduler,
    rx: mpsc::Receiver<OverlayEvent>,
    display: D,
    countdown: Option<u64>,
}

impl<D: DisplaySurface> Overlay<D> {
    pub fn new(
        words: WordsList,
        tx: mpsc::Sender<OverlayEvent>,
        rx: mpsc::Receiver<OverlayEvent>,
        display: D,
        next_round_delay: Duration,
    ) -> Self {
        let round = Round::new(words.random_answer(), 1);

        Self {
            words,
            round,
            scheduler: Scheduler::new(tx, next_round_delay),
            rx,
            display,
            countdown: None,
        }
    }

    /// Processes events until shutdown. Signals `shutdown` so the input
    /// adapters stop with us.
    pub async fn run(mut self, shutdown: watch::Sender<bool>) {
        self.render();

        while let Some(event) = self.rx.recv().await {
            if event == OverlayEvent::Shutdown {
                info!("shutting down");
                let _ = shutdown.send(true);
                break;
            }

            self.handle(event);
            self.render();
        }
    }

    fn handle(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::Letter(ch) => self.round.type_letter(ch),
            OverlayEvent::Backspace => self.round.backspace(),
            OverlayEvent::Submit => {
                let result = self.round.submit(&self.words, "keyboard");
                self.after_submit(result);
            }
            OverlayEvent::FeedGuess { username, word } => {
                let source = format!("feed:{username}");
                let result = self.round.submit_direct(&word, &self.words, &source);
                self.after_submit(result);
            }
            OverlayEvent::CountdownTick(left) => self.countdown = Some(left),
            OverlayEvent::NextRound => self.next_round(),
            OverlayEvent::Shutdown => unreachable!("handled in run"),
        }
    }

    fn after_submit(&mut self, result: Result<Submitted, crate::games::wordle::GuessError>) {
        match result {
            Ok(submitted) if submitted.ended_round() => self.scheduler.schedule(),
            Ok(_) => {}
            // the round already carries the user-facing message
            Err(err) => debug!(%err, "guess rejected"),
        }
    }

    /// Tears down round timers and starts over with a fresh answer.
    fn next_round(&mut self) {
        self.scheduler.cancel();
        self.countdown = None;

        let number = self.round.number() + 1;
        self.round = Round::new(self.words.random_answer(), number);
    }

    fn render(&mut self) {
        let snapshot = Snapshot::of(&self.round, self.countdown);
        self.display.render(&snapshot);
    }
}
