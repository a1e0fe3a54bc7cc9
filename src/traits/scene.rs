use crate::camera::CameraPose;
use crate::error::SceneError;
use crate::math::{Ray, TileFilter};
use glam::Vec3;

/// Closest intersection of a height query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub distance: f32,
}

/// The slice of the 3D scene the camera controls talk to.
///
/// The controls only borrow it for the duration of an update; they never own
/// the scene or the pose they write into it.
pub trait SceneQuery {
    /// Cast `ray` against the height geometry of every tile whose origin
    /// `tiles` accepts, returning the closest hit within `near..=far`.
    fn cast_ray(
        &self,
        ray: &Ray,
        tiles: &TileFilter,
        near: f32,
        far: f32,
    ) -> Result<Option<RayHit>, SceneError>;

    /// Point the render camera at a new pose.
    fn write_camera_pose(&mut self, pose: &CameraPose);
}
