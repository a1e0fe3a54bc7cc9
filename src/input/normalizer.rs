use glam::Vec2;

use super::{KeyState, PointerState};
use crate::config::Config;
use crate::controls::MotionMode;
use crate::traits::Key;

/// Screen pixels per frame a held rotate or tilt key contributes, before the
/// rotate/tilt speed gains.
const KEY_ORBIT_STEP: f32 = 5.0;

/// Everything the input produced for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInputDelta {
    /// Screen-space pan, in pixels.
    pub pan: Vec2,
    /// Screen-space orbit, in pixels. x turns yaw, y turns pitch.
    pub orbit: Vec2,
}

impl FrameInputDelta {
    pub fn is_idle(&self) -> bool {
        self.pan == Vec2::ZERO && self.orbit == Vec2::ZERO
    }
}

/// Zoom multiplier for one wheel step. Scrolling toward the user zooms out.
pub fn wheel_factor(delta_y: f32, speed: f32) -> f32 {
    if delta_y > 0.0 {
        speed
    } else if delta_y < 0.0 {
        1.0 / speed
    } else {
        1.0
    }
}

/// Accumulates pointer and key input between frames.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    pointer: PointerState,
    keys: KeyState,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self {
            pointer: PointerState::default(),
            keys: KeyState::new(),
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    pub fn key_down(&mut self, key: Key) {
        self.keys.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Forget held keys. The pointer keeps its position but reports no
    /// movement until it moves again.
    pub fn reset(&mut self) {
        self.keys.clear();
        self.pointer.take_delta();
    }

    /// Drain this frame's input.
    ///
    /// While panning, a pointer that moved is the only pan source for the
    /// frame; otherwise the held direction keys pan. Keys are never added on
    /// top of a drag.
    pub fn frame_delta(&mut self, mode: MotionMode, config: &Config) -> FrameInputDelta {
        let pointer = self.pointer.take_delta();
        let key_pan = self.keys.pan_delta(config.pan.key_step);

        let pan = if mode == MotionMode::Panning && pointer != Vec2::ZERO {
            pointer
        } else {
            key_pan
        };

        let key_orbit = self.keys.orbit_delta(KEY_ORBIT_STEP)
            * Vec2::new(config.rotate.speed, config.tilt.speed);
        let orbit = if mode == MotionMode::Orbiting {
            pointer + key_orbit
        } else {
            key_orbit
        };

        FrameInputDelta { pan, orbit }
    }
}
