//! Terminal input
//!
//! Terminals only report key presses (and auto-repeat), never releases. A key
//! counts as held for [`KEY_HOLD_WINDOW`] after its last press; when the
//! window lapses a synthetic `KeyReleased` is emitted.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use termion::event::Key as TermKey;
use termion::input::{Keys, TermRead};
use termion::AsyncReader;

use super::{InputEvent, Key, KeyboardState};

/// How long a key stays "pressed" after its last press/repeat
pub const KEY_HOLD_WINDOW: Duration = Duration::from_millis(250);

/// Translate a termion key into a game input event
pub fn translate(key: TermKey) -> Option<InputEvent> {
    let key = match key {
        TermKey::Ctrl('c') | TermKey::Char('q') => return Some(InputEvent::Closed),
        TermKey::Up => Key::Up,
        TermKey::Down => Key::Down,
        TermKey::Esc => Key::Escape,
        TermKey::Char('\n') | TermKey::Char('\r') => Key::Enter,
        TermKey::Char(' ') => Key::Space,
        TermKey::Char('w') | TermKey::Char('W') => Key::W,
        TermKey::Char('s') | TermKey::Char('S') => Key::S,
        TermKey::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(InputEvent::KeyPressed(key))
}

/// Tracks which keys are held from a stream of press events
#[derive(Debug, Default)]
pub struct KeyHoldTracker {
    last_seen: HashMap<Key, Instant>,
}

impl KeyHoldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns false for an auto-repeat of an already held key.
    pub fn press(&mut self, key: Key, now: Instant) -> bool {
        self.last_seen.insert(key, now).is_none()
    }

    /// Drop keys whose hold window lapsed, returning them
    pub fn expire(&mut self, now: Instant) -> Vec<Key> {
        let mut released: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, seen)| now.duration_since(**seen) > KEY_HOLD_WINDOW)
            .map(|(key, _)| *key)
            .collect();
        released.sort();
        for key in &released {
            self.last_seen.remove(key);
        }
        released
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.last_seen.contains_key(&key)
    }
}

/// Non-blocking keyboard input from the controlling terminal
pub struct TerminalInput {
    keys: Keys<AsyncReader>,
    held: KeyHoldTracker,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            keys: termion::async_stdin().keys(),
            held: KeyHoldTracker::new(),
        }
    }

    /// Drain pending terminal input into game events
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let now = Instant::now();
        let mut events = Vec::new();

        while let Some(key) = self.keys.next() {
            let key = match key {
                Ok(key) => key,
                Err(e) => {
                    log::warn!("Failed to read terminal input: {}", e);
                    break;
                }
            };
            match translate(key) {
                Some(InputEvent::KeyPressed(key)) => {
                    // Menus react to every press; repeats just refresh the hold
                    self.held.press(key, now);
                    events.push(InputEvent::KeyPressed(key));
                }
                Some(event) => events.push(event),
                None => {}
            }
        }

        events.extend(
            self.held
                .expire(now)
                .into_iter()
                .map(InputEvent::KeyReleased),
        );
        events
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState for TerminalInput {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.held.is_held(key)
    }
}
