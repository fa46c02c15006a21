use std::time::Duration;

use serde::Deserialize;
use tokio::{
    sync::{mpsc, watch},
    time::MissedTickBehavior,
};
use tracing::{debug, info, trace};
use url::Url;

use crate::games::wordle::WORD_LEN;

use super::event::OverlayEvent;

/// The single most-recent comment the relay endpoint holds. Last write
/// wins on the relay side; `ts` strictly increases across genuine writes.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedComment {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub ts: u64,
}

/// Polls the comment relay and turns fresh comments into direct guesses.
///
/// One fetch at a time: the next tick is only awaited after the current
/// request settles. Transport failures are logged and retried on the next
/// tick, never escalated.
#[derive(Debug)]
pub struct FeedPoller {
    client: reqwest::Client,
    url: Url,
    prefixes: Vec<String>,
    poll: Duration,
    last_ts: u64,
}

impl FeedPoller {
    pub fn new(url: Url, poll: Duration, prefixes: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            prefixes,
            poll,
            last_ts: 0,
        }
    }

    pub async fn run(mut self, tx: mpsc::Sender<OverlayEvent>, mut shutdown: watch::Receiver<bool>) {
        info!(url = %self.url, poll_ms = self.poll.as_millis() as u64, "feed poller started");

        let mut ticks = tokio::time::interval(self.poll);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticks.tick() => match self.poll_once().await {
                    Ok(Some(event)) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => debug!(%err, "feed poll failed"),
                }
            }
        }

        trace!("feed poller stopped");
    }

    async fn poll_once(&mut self) -> Result<Option<OverlayEvent>, reqwest::Error> {
        let comment = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<FeedComment>()
            .await?;

        Ok(self.accept(comment))
    }

    /// Decides whether a fetched comment becomes a guess. Only strictly
    /// newer timestamps are considered, so the same record is never
    /// processed twice across poll ticks.
    fn accept(&mut self, comment: FeedComment) -> Option<OverlayEvent> {
        if comment.ts <= self.last_ts {
            return None;
        }

        self.last_ts = comment.ts;

        let word = self.normalize(&comment.comment);
        if word.chars().count() != WORD_LEN {
            trace!(
                user = %comment.username,
                comment = %comment.comment,
                "comment is not a guess"
            );
            return None;
        }

        let username = comment.username.trim();
        let username = if username.is_empty() { "user" } else { username };

        info!(user = username, word = %word, "guess from feed");

        Some(OverlayEvent::FeedGuess {
            username: username.to_owned(),
            word,
        })
    }

    /// Strips recognized prefixes and everything non-alphabetic, so
    /// "jawab: DAPUR!!" and "dapur" both come out as "dapur".
    fn normalize(&self, raw: &str) -> String {
        let mut text = raw.trim().to_lowercase();

        for prefix in &self.prefixes {
            if let Some(stripped) = text.strip_prefix(prefix.as_str()) {
                text = stripped.trim().to_owned();
            }
        }

        text.chars().filter(|ch| ch.is_ascii_alphabetic()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::{FeedComment, FeedPoller, OverlayEvent};

    fn poller() -> FeedPoller {
        FeedPoller::new(
            "http://127.0.0.1:3000/api/comment".parse().unwrap(),
            Duration::from_millis(500),
            vec![
                "jawab:".to_owned(),
                "answer:".to_owned(),
                "ans:".to_owned(),
                "kata:".to_owned(),
                "!".to_owned(),
            ],
        )
    }

    fn comment(username: &str, comment: &str, ts: u64) -> FeedComment {
        FeedComment {
            username: username.to_owned(),
            comment: comment.to_owned(),
            ts,
        }
    }

    #[test]
    fn comment_record_parses_from_relay_json() {
        let comment: FeedComment = serde_json::from_str(
            r#"{"username":"umi","comment":"jawab: beras","ts":1724900000000}"#,
        )
        .unwrap();

        assert_eq!(comment.username, "umi");
        assert_eq!(comment.comment, "jawab: beras");
        assert_eq!(comment.ts, 1_724_900_000_000);

        // the relay's initial state before anyone has commented
        let blank: FeedComment =
            serde_json::from_str(r#"{"username":"","comment":"","ts":0}"#).unwrap();
        assert_eq!(blank.ts, 0);
    }

    #[test]
    fn normalize_strips_prefixes_and_noise() {
        let poller = poller();

        assert_eq!(poller.normalize("dapur"), "dapur");
        assert_eq!(poller.normalize("  DAPUR  "), "dapur");
        assert_eq!(poller.normalize("jawab: dapur"), "dapur");
        assert_eq!(poller.normalize("answer:dapur!!"), "dapur");
        assert_eq!(poller.normalize("!dapur"), "dapur");
        assert_eq!(poller.normalize("da-pur 123"), "dapur");
    }

    #[test]
    fn stale_timestamps_are_dropped() {
        let mut poller = poller();

        assert!(poller.accept(comment("umi", "beras", 10)).is_some());
        // same record seen again on the next tick
        assert!(poller.accept(comment("umi", "beras", 10)).is_none());
        assert!(poller.accept(comment("umi", "lolos", 9)).is_none());
        assert!(poller.accept(comment("umi", "lolos", 11)).is_some());
    }

    #[test]
    fn short_and_long_comments_are_ignored_but_still_consume_ts() {
        let mut poller = poller();

        assert!(poller.accept(comment("umi", "hi", 5)).is_none());
        // not re-examined later: the record was processed, just not a guess
        assert!(poller.accept(comment("umi", "hi", 5)).is_none());
        assert!(poller.accept(comment("umi", "kepanjangan", 6)).is_none());
    }

    #[test]
    fn guess_event_carries_the_source_username() {
        let mut poller = poller();

        assert_eq!(
            poller.accept(comment(" umi ", "kata: beras", 1)),
            Some(OverlayEvent::FeedGuess {
                username: "umi".to_owned(),
                word: "beras".to_owned(),
            })
        );

        assert_eq!(
            poller.accept(comment("", "beras", 2)),
            Some(OverlayEvent::FeedGuess {
                username: "user".to_owned(),
                word: "beras".to_owned(),
            })
        );
    }
}
