use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time};
use tracing::{debug, trace};

use super::event::OverlayEvent;

/// Drives the gap between rounds: one task that ticks the countdown once a
/// second and then fires [`OverlayEvent::NextRound`]. Countdown and advance
/// share the task so they are always torn down together.
#[derive(Debug)]
pub struct Scheduler {
    tx: mpsc::Sender<OverlayEvent>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(tx: mpsc::Sender<OverlayEvent>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: None,
        }
    }

    /// Starts the next-round countdown. Any countdown already running is
    /// canceled first, so a stale timer can never fire into a new round.
    pub fn schedule(&mut self) {
        self.cancel();

        debug!(delay_secs = self.delay.as_secs(), "next round scheduled");

        let tx = self.tx.clone();
        let secs = self.delay.as_secs();

        self.pending = Some(tokio::spawn(async move {
            for left in (1..=secs).rev() {
                if tx.send(OverlayEvent::CountdownTick(left)).await.is_err() {
                    return;
                }

                time::sleep(Duration::from_secs(1)).await;
            }

            let _ = tx.send(OverlayEvent::NextRound).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!("canceling pending round timer");
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
