use glam::Vec2;
use std::collections::HashSet;

use crate::traits::{Controller, Key};

/// Held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashSet<Key>,
    /// Same keys in press order (for `down_keys`)
    pressed_vec: Vec<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if self.pressed.insert(key) {
            self.pressed_vec.push(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        if self.pressed.remove(&key) {
            self.pressed_vec.retain(|&k| k != key);
        }
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
        self.pressed_vec.clear();
    }

    fn axis(&self, negative: Key, positive: Key) -> f32 {
        match (self.is_down(negative), self.is_down(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Screen-space pan from the direction keys, `step` pixels per held key.
    pub fn pan_delta(&self, step: f32) -> Vec2 {
        Vec2::new(self.axis(Key::Left, Key::Right), self.axis(Key::Up, Key::Down)) * step
    }

    /// Screen-space orbit from the rotate (x) and tilt (y) keys.
    pub fn orbit_delta(&self, step: f32) -> Vec2 {
        Vec2::new(
            self.axis(Key::RotateLeft, Key::RotateRight),
            self.axis(Key::TiltDown, Key::TiltUp),
        ) * step
    }
}

impl Controller for KeyState {
    fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn down_keys(&self) -> &[Key] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_empty() {
        let keys = KeyState::new();
        assert!(!keys.is_down(Key::Up));
        assert!(keys.down_keys().is_empty());
        assert_eq!(keys.pan_delta(20.0), Vec2::ZERO);
    }

    #[test]
    fn test_press_twice_tracked_once() {
        let mut keys = KeyState::new();
        keys.press(Key::Left);
        keys.press(Key::Left);
        assert_eq!(keys.down_keys(), &[Key::Left]);

        keys.release(Key::Left);
        assert!(keys.down_keys().is_empty());
    }

    #[test]
    fn test_pan_directions() {
        let mut keys = KeyState::new();
        keys.press(Key::Up);
        assert_eq!(keys.pan_delta(20.0), Vec2::new(0.0, -20.0));

        keys.press(Key::Right);
        assert_eq!(keys.pan_delta(20.0), Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = KeyState::new();
        keys.press(Key::Left);
        keys.press(Key::Right);
        assert_eq!(keys.pan_delta(20.0), Vec2::ZERO);
    }

    #[test]
    fn test_orbit_keys() {
        let mut keys = KeyState::new();
        keys.press(Key::RotateRight);
        keys.press(Key::TiltUp);
        assert_eq!(keys.orbit_delta(10.0), Vec2::new(10.0, 10.0));
        // Orbit keys do not pan
        assert_eq!(keys.pan_delta(10.0), Vec2::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::new();
        keys.press(Key::Down);
        keys.press(Key::TiltDown);
        keys.clear();
        assert!(keys.down_keys().is_empty());
        assert!(!keys.is_down(Key::Down));
    }
}
