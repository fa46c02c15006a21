#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod errors;
mod framework;
mod games;
mod overlay;

use tokio::sync::{mpsc, watch};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tracing_unwrap::ResultExt;

use errors::Error;
use framework::config::AppConfig;
use games::wordle::WordsList;
use overlay::{display::TerminalDisplay, feed::FeedPoller, keyboard, Overlay};

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    run().await.expect_or_log("overlay stopped");
}

async fn run() -> Result<(), Error> {
    let config = AppConfig::load()?;

    let words = WordsList::load(&config.words.file)?;
    info!(words = words.len(), "words list ready");

    let (tx, rx) = mpsc::channel(64);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let display = TerminalDisplay::new()?;

    tokio::spawn(keyboard::run(tx.clone(), shutdown_rx.clone()));

    let poller = FeedPoller::new(
        config.feed.url.clone(),
        config.feed.poll_interval(),
        config.feed.prefixes.clone(),
    );
    tokio::spawn(poller.run(tx.clone(), shutdown_rx));

    Overlay::new(words, tx, rx, display, config.round.next_delay())
        .run(shutdown_tx)
        .await;

    Ok(())
}
