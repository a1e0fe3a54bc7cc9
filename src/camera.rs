use glam::{Mat4, Quat, Vec3};

use crate::config::ZoomSettings;

/// Pitch values below this snap to [`MIN_PITCH`].
pub const PITCH_SNAP: f32 = 0.01;
/// Smallest pitch the camera uses. Keeps the look-at basis away from the pole.
pub const MIN_PITCH: f32 = 0.001;

/// Orbit camera in spherical coordinates around a focus point.
///
/// `pitch` is measured from straight down: 0 looks at the ground from above,
/// values toward `pi/2` tilt toward the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParameters {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraParameters {
    pub fn new(focus: Vec3, distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            focus,
            distance,
            yaw,
            pitch,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Offset from the focus to the camera.
    pub fn orbit_offset(&self) -> Vec3 {
        self.rotation() * Vec3::new(0.0, self.distance, 0.0)
    }

    pub fn camera_position(&self) -> Vec3 {
        self.focus + self.orbit_offset()
    }

    /// Screen-up direction of a camera looking at the focus.
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.camera_position(),
            look_at: self.focus,
            up: self.up(),
        }
    }
}

/// Upper pitch bound for a zoom distance.
///
/// Equals `tilt_max` at `zoom.max` and falls off biquadratically toward
/// `zoom.min`, so close-range views stay near top-down. Never below
/// [`MIN_PITCH`].
pub fn max_pitch(distance: f32, zoom: &ZoomSettings, tilt_max: f32) -> f32 {
    let closeness = ((zoom.max - distance) / (zoom.max - zoom.min)).clamp(0.0, 1.0);
    let falloff = (closeness * tilt_max.powi(4)).powf(0.25);
    (tilt_max - falloff).max(MIN_PITCH)
}

pub fn clamp_pitch(pitch: f32, max: f32) -> f32 {
    let pitch = pitch.min(max);
    if pitch < PITCH_SNAP {
        MIN_PITCH
    } else {
        pitch
    }
}

/// Camera placement written to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_zero_pitch_is_straight_above() {
        let params = CameraParameters::new(Vec3::new(5.0, 70.0, -3.0), 1000.0, 1.2, 0.0);
        assert!(approx(params.camera_position(), Vec3::new(5.0, 1070.0, -3.0)));
    }

    #[test]
    fn test_pitch_tilts_toward_positive_z_at_zero_yaw() {
        let params = CameraParameters::new(Vec3::ZERO, 10.0, 0.0, FRAC_PI_2);
        assert!(approx(params.orbit_offset(), Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_yaw_swings_around_y() {
        let params = CameraParameters::new(Vec3::ZERO, 10.0, FRAC_PI_2, FRAC_PI_2);
        assert!(approx(params.orbit_offset(), Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_offset_length_is_distance() {
        let params = CameraParameters::new(Vec3::ZERO, 250.0, 0.7, 0.9);
        assert!((params.orbit_offset().length() - 250.0).abs() < 0.01);
    }

    #[test]
    fn test_up_is_perpendicular_to_view() {
        let params = CameraParameters::new(Vec3::ZERO, 100.0, 0.4, 0.6);
        let pose = params.pose();
        assert!(pose.forward().dot(pose.up).abs() < 1e-4);
    }

    #[test]
    fn test_max_pitch_endpoints() {
        let zoom = ZoomSettings::default();
        let tilt_max = PI / 2.1;
        assert!((max_pitch(zoom.max, &zoom, tilt_max) - tilt_max).abs() < 1e-5);
        assert_eq!(max_pitch(zoom.min, &zoom, tilt_max), MIN_PITCH);
    }

    #[test]
    fn test_max_pitch_outside_zoom_range_is_clamped() {
        let zoom = ZoomSettings::default();
        let tilt_max = PI / 2.1;
        assert_eq!(max_pitch(5000.0, &zoom, tilt_max), max_pitch(zoom.max, &zoom, tilt_max));
        assert_eq!(max_pitch(1.0, &zoom, tilt_max), MIN_PITCH);
    }

    #[test]
    fn test_clamp_pitch_snaps_low_values() {
        assert_eq!(clamp_pitch(0.005, 1.0), MIN_PITCH);
        assert_eq!(clamp_pitch(-0.5, 1.0), MIN_PITCH);
        assert_eq!(clamp_pitch(0.5, 1.0), 0.5);
        assert_eq!(clamp_pitch(1.4, 1.0), 1.0);
    }

    #[test]
    fn test_view_matrix_maps_focus_ahead() {
        let pose = CameraParameters::new(Vec3::new(10.0, 0.0, 5.0), 100.0, 0.3, 0.6).pose();
        let in_view = pose.view_matrix().transform_point3(pose.look_at);
        // Right-handed view space looks down -Z
        assert!(in_view.x.abs() < 1e-3 && in_view.y.abs() < 1e-3);
        assert!((in_view.z + 100.0).abs() < 1e-2);
    }
}
