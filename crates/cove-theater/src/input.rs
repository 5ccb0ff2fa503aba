use std::collections::HashSet;

/// Logical keys the game reacts to. Device mapping lives in the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Move left.
    Left,
    /// Move right.
    Right,
    /// Interact / close dialog.
    Confirm,
    /// Play the demo sequence.
    Trigger,
    /// Toggle smooth camera following.
    CameraMode,
    /// Grow the tile size.
    ZoomIn,
    /// Shrink the tile size.
    ZoomOut,
    /// Leave the current screen.
    Quit,
}

/// Per-frame keyboard oracle.
///
/// `was_released` is edge-triggered: it is true only on the frame a key goes
/// from down to up.
pub trait Input {
    /// Whether `key` is currently held down.
    fn is_held(&self, key: Key) -> bool;
    /// Whether `key` was released during this frame.
    fn was_released(&self, key: Key) -> bool;
}

/// An [`Input`] built from explicit key sets.
///
/// The GUI fills one per frame from the window; tests drive it by hand.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
    released: HashSet<Key>,
}

impl KeyState {
    /// Nothing held, nothing released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Press and hold `key`.
    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Let go of `key`; it reads as released until [`KeyState::next_frame`].
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
        self.released.insert(key);
    }

    /// Forget this frame's releases. Held keys stay held.
    pub fn next_frame(&mut self) {
        self.released.clear();
    }

    /// Builder form of [`KeyState::hold`].
    pub fn with_held(mut self, key: Key) -> Self {
        self.hold(key);
        self
    }

    /// Builder form of [`KeyState::release`].
    pub fn with_released(mut self, key: Key) -> Self {
        self.release(key);
        self
    }
}

impl Input for KeyState {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn was_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_one_frame_edge() {
        let mut keys = KeyState::new().with_held(Key::Confirm);
        assert!(keys.is_held(Key::Confirm));
        assert!(!keys.was_released(Key::Confirm));

        keys.release(Key::Confirm);
        assert!(!keys.is_held(Key::Confirm));
        assert!(keys.was_released(Key::Confirm));

        keys.next_frame();
        assert!(!keys.was_released(Key::Confirm));
    }

    #[test]
    fn next_frame_keeps_held_keys() {
        let mut keys = KeyState::new().with_held(Key::Left);
        keys.next_frame();
        assert!(keys.is_held(Key::Left));
    }
}
