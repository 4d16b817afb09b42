use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

/// How often the blocking reader checks whether the app has shut down
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Bridge crossterm's blocking event source into an async channel.
///
/// Key presses arrive on the returned receiver in the order they were typed;
/// the screens apply them strictly one at a time, interleaved with timer
/// ticks, so engine state is never mutated concurrently. The task exits once
/// the receiver is dropped.
pub fn spawn_key_reader() -> mpsc::Receiver<KeyEvent> {
    let (tx, rx) = mpsc::channel::<KeyEvent>(32);

    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && tx.blocking_send(key).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Key input source failed: {}", e);
                break;
            }
        }
    });

    rx
}
