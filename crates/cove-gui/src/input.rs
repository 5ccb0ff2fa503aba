//! Keyboard mapping from window keys to game keys.

use cove_theater::{Key, KeyState};
use macroquad::prelude::*;

/// Window keys bound to each game key.
pub const BINDINGS: &[(Key, &[KeyCode])] = &[
    (Key::Up, &[KeyCode::W, KeyCode::Up]),
    (Key::Down, &[KeyCode::S, KeyCode::Down]),
    (Key::Left, &[KeyCode::A, KeyCode::Left]),
    (Key::Right, &[KeyCode::D, KeyCode::Right]),
    (Key::Confirm, &[KeyCode::Enter, KeyCode::Space]),
    (Key::Trigger, &[KeyCode::T]),
    (Key::CameraMode, &[KeyCode::F]),
    (Key::ZoomIn, &[KeyCode::E]),
    (Key::ZoomOut, &[KeyCode::Q]),
    (Key::Quit, &[KeyCode::Escape]),
];

/// Window keys bound to `key`.
pub fn codes_for(key: Key) -> &'static [KeyCode] {
    BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(&[], |(_, codes)| codes)
}

/// Snapshot this frame's keyboard as game keys.
pub fn poll_keys() -> KeyState {
    let mut keys = KeyState::new();
    for (key, codes) in BINDINGS {
        if codes.iter().any(|c| is_key_released(*c)) {
            keys.release(*key);
        }
        if codes.iter().any(|c| is_key_down(*c)) {
            keys.hold(*key);
        }
    }
    keys
}

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}
