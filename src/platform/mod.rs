//! Platform abstraction layer
//!
//! Everything the game needs from the outside world, behind small seams:
//! - Input events (key pressed/released, window closed)
//! - Polled keyboard state for paddle controllers
//! - Font metrics for text layout
//! - Terminal input (native only)

pub mod font;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use font::Font;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    Escape,
    Space,
    Char(char),
}

/// Discrete input event, consumed once per loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    /// The window (or terminal session) was closed
    Closed,
}

impl InputEvent {
    pub fn is_released(&self, key: Key) -> bool {
        *self == InputEvent::KeyReleased(key)
    }
}

/// Live keyboard state, polled every frame by keyboard paddle controllers
pub trait KeyboardState {
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// A plain set of held keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }
}

impl KeyboardState for HeldKeys {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}
