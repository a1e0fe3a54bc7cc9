use serde::{Deserialize, Serialize};

/// Logical keyboard controls, independent of the physical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    RotateLeft,
    RotateRight,
    TiltUp,
    TiltDown,
}

/// Controller - handles held key states
pub trait Controller {
    /// Check if key is currently held
    fn is_down(&self, key: Key) -> bool;

    /// Get all currently held keys, in press order
    fn down_keys(&self) -> &[Key];
}
