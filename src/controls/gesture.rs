use glam::Vec2;

/// Values captured when a gesture starts, consumed while it moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Target focus (x, z) when the pan started.
    pub pan_origin: Option<Vec2>,
    /// Target pitch when the tilt started.
    pub tilt_origin: Option<f32>,
    /// Last reported twist angle, in degrees.
    pub rotation_origin: Option<f32>,
    /// Target distance when the pinch started.
    pub zoom_origin: Option<f32>,
}

impl GestureState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Difference between two twist angles in degrees, wrapped into [-180, 180].
pub fn wrap_degrees(delta: f32) -> f32 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
