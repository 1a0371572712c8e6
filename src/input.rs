//! Per-frame input snapshot
//!
//! The OS event loop (external) feeds key transitions in; the game reads
//! three predicates per button: held, pressed this frame, released this
//! frame. `begin_new_frame` clears the per-frame transition sets.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

#[derive(Debug, Default)]
pub struct Input {
    held: HashMap<Button, bool>,
    pressed: HashMap<Button, bool>,
    released: HashMap<Button, bool>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's presses and releases.
    pub fn begin_new_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn key_down(&mut self, button: Button) {
        self.pressed.insert(button, true);
        self.held.insert(button, true);
    }

    pub fn key_up(&mut self, button: Button) {
        self.released.insert(button, true);
        self.held.insert(button, false);
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.get(&button).copied().unwrap_or(false)
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed.get(&button).copied().unwrap_or(false)
    }

    pub fn was_released(&self, button: Button) -> bool {
        self.released.get(&button).copied().unwrap_or(false)
    }
}
