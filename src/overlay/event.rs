/// Everything the controller can react to, merged into one stream so all
/// state mutation happens on a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A letter typed on the local keyboard.
    Letter(char),
    Backspace,
    /// Submit the active row (keyboard confirm key).
    Submit,
    /// A whole-word guess lifted from the comment feed.
    FeedGuess { username: String, word: String },
    /// Seconds left until the next round starts.
    CountdownTick(u64),
    /// The between-rounds delay expired; draw a new answer.
    NextRound,
    Shutdown,
}
