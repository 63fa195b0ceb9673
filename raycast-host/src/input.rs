//! Translates raylib's keyboard state into the scancode-indexed snapshot
//! `raycast_core::update` expects. Grounded on the teacher's
//! `player.rs::process_events`, minus the mouse-look and the maze-specific
//! collision check — both now live one layer down, in `raycast-core`.

use raycast_core::input::{InputSnapshot, SCANCODE_A, SCANCODE_D, SCANCODE_S, SCANCODE_W};
use raylib::prelude::*;

const SCANCODE_BUFFER_LEN: usize = 32;

/// Owns the scancode buffer so `InputSnapshot` can borrow from it each
/// frame without a fresh allocation.
pub struct HostInput {
    scancodes: [u8; SCANCODE_BUFFER_LEN],
}

impl HostInput {
    pub fn new() -> Self {
        Self {
            scancodes: [0; SCANCODE_BUFFER_LEN],
        }
    }

    pub fn poll(&mut self, rl: &RaylibHandle) -> InputSnapshot<'_> {
        self.scancodes.fill(0);
        self.scancodes[SCANCODE_W] = rl.is_key_down(KeyboardKey::KEY_W) as u8;
        self.scancodes[SCANCODE_S] = rl.is_key_down(KeyboardKey::KEY_S) as u8;
        self.scancodes[SCANCODE_A] = rl.is_key_down(KeyboardKey::KEY_A) as u8;
        self.scancodes[SCANCODE_D] = rl.is_key_down(KeyboardKey::KEY_D) as u8;
        InputSnapshot::new(&self.scancodes)
    }
}

impl Default for HostInput {
    fn default() -> Self {
        Self::new()
    }
}
