use glam::Vec3;

use crate::camera::CameraParameters;
use crate::config::Config;

/// Per-frame change below which the camera counts as at rest.
pub const CHANGE_EPSILON: f32 = 0.001;

/// One exponential smoothing step: move `factor` of the way to `target`.
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// How far each axis moved in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothingStep {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Advance `current` toward `target`. The focus height eases toward
/// `floor_y` (the target height raised to the terrain) at the slower
/// vertical rate.
pub fn advance(
    current: &mut CameraParameters,
    target: &CameraParameters,
    floor_y: f32,
    config: &Config,
) -> SmoothingStep {
    let before = *current;

    current.focus.x = smooth_toward(current.focus.x, target.focus.x, config.pan.smooth);
    current.focus.y = smooth_toward(current.focus.y, floor_y, config.pan.smooth_y);
    current.focus.z = smooth_toward(current.focus.z, target.focus.z, config.pan.smooth);
    current.distance = smooth_toward(current.distance, target.distance, config.zoom.smooth);
    current.yaw = smooth_toward(current.yaw, target.yaw, config.rotate.smooth);
    current.pitch = smooth_toward(current.pitch, target.pitch, config.tilt.smooth);

    SmoothingStep {
        focus: current.focus - before.focus,
        distance: current.distance - before.distance,
        yaw: current.yaw - before.yaw,
        pitch: current.pitch - before.pitch,
    }
}
