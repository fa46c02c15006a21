use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

use super::event::OverlayEvent;

/// Translates one terminal key event. Letters type into the active row,
/// enter submits it; everything else is noise except the exit keys.
pub fn map_key(key: KeyEvent) -> Option<OverlayEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(OverlayEvent::Shutdown)
        }
        KeyCode::Esc => Some(OverlayEvent::Shutdown),
        KeyCode::Enter => Some(OverlayEvent::Submit),
        KeyCode::Backspace => Some(OverlayEvent::Backspace),
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
            Some(OverlayEvent::Letter(ch.to_ascii_lowercase()))
        }
        _ => None,
    }
}

/// Forwards key events to the controller until shutdown.
pub async fn run(tx: mpsc::Sender<OverlayEvent>, mut shutdown: watch::Receiver<bool>) {
    let mut keys = EventStream::new();

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            maybe = keys.next() => match maybe {
                Some(Ok(Event::Key(key))) => {
                    if let Some(event) = map_key(key) {
                        trace!(?event, "key");
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => debug!(%err, "terminal event error"),
                None => break,
            }
        }
    }

    trace!("keyboard adapter stopped");
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::{map_key, OverlayEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(
            map_key(key(KeyCode::Char('A'))),
            Some(OverlayEvent::Letter('a'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('z'))),
            Some(OverlayEvent::Letter('z'))
        );
    }

    #[test]
    fn control_keys_map_to_actions() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(OverlayEvent::Submit));
        assert_eq!(
            map_key(key(KeyCode::Backspace)),
            Some(OverlayEvent::Backspace)
        );
        assert_eq!(map_key(key(KeyCode::Esc)), Some(OverlayEvent::Shutdown));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(OverlayEvent::Shutdown)
        );
    }

    #[test]
    fn noise_is_dropped() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), None);
        assert_eq!(map_key(key(KeyCode::Char(' '))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
        assert_eq!(map_key(key(KeyCode::Left)), None);
    }
}
