use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::traits::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Usually the left mouse button. Starts panning.
    Primary,
    /// Usually the right mouse button. Starts orbiting.
    Secondary,
    Middle,
}

/// Device that produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    #[default]
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    /// Single pointer, no significant movement.
    Tap,
    /// Single finger drag.
    Pan,
    /// Two finger vertical drag.
    Tilt,
    /// Two finger twist.
    Rotate,
    /// Two finger pinch.
    Pinch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GesturePhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A recognised gesture as reported by the host's gesture recogniser.
///
/// `delta` is the cumulative movement since the gesture started, `rotation`
/// the absolute twist angle in degrees, `scale` the pinch ratio relative to
/// the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub phase: GesturePhase,
    #[serde(default)]
    pub delta: Vec2,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "unit_scale")]
    pub scale: f32,
    #[serde(default)]
    pub center: Vec2,
    #[serde(default)]
    pub pointer: PointerKind,
}

fn unit_scale() -> f32 {
    1.0
}

impl Default for GestureEvent {
    fn default() -> Self {
        Self {
            kind: GestureKind::Tap,
            phase: GesturePhase::End,
            delta: Vec2::ZERO,
            rotation: 0.0,
            scale: unit_scale(),
            center: Vec2::ZERO,
            pointer: PointerKind::Touch,
        }
    }
}

impl GestureEvent {
    pub fn new(kind: GestureKind, phase: GesturePhase) -> Self {
        Self {
            kind,
            phase,
            ..Default::default()
        }
    }

    pub fn with_delta(mut self, delta: Vec2) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_pointer(mut self, pointer: PointerKind) -> Self {
        self.pointer = pointer;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    PointerMove { position: Vec2 },
    PointerDown { button: PointerButton },
    PointerUp { button: PointerButton },
    /// Positive `delta_y` scrolls toward the user and zooms out.
    Wheel { delta_y: f32 },
    KeyDown { key: Key },
    KeyUp { key: Key },
    Gesture(GestureEvent),
    ViewportResized { height: f32 },
}

/// Single-pointer tap forwarded to hit-testing collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoClick {
    /// Screen position of the tap.
    pub position: Vec2,
}
