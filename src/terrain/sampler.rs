use glam::{Vec2, Vec3};

use crate::config::TerrainSettings;
use crate::math::{Ray, TileFilter};
use crate::traits::SceneQuery;

/// Tracks the ground height under the camera.
///
/// The height only changes when a ray actually hits geometry. Failed or
/// empty queries keep the last good value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSampler {
    height: f32,
    tile_size: Option<Vec2>,
    ray_origin_height: f32,
    near: f32,
    far: f32,
}

impl TerrainSampler {
    pub fn new(settings: &TerrainSettings) -> Self {
        Self {
            height: settings.initial_height,
            tile_size: settings.tile_size,
            ray_origin_height: settings.ray_origin_height,
            near: settings.near,
            far: settings.far,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn tile_size(&self) -> Option<Vec2> {
        self.tile_size
    }

    pub fn set_tile_size(&mut self, tile_size: Vec2) {
        self.tile_size = Some(tile_size);
    }

    /// Ground height straight below `point`, if any.
    pub fn ground_at<S: SceneQuery + ?Sized>(&self, scene: &S, point: Vec3) -> Option<f32> {
        let tile_size = self.tile_size?;
        let ray = Ray::down(Vec3::new(point.x, self.ray_origin_height, point.z));
        let tiles = TileFilter::new(point, tile_size);

        match scene.cast_ray(&ray, &tiles, self.near, self.far) {
            Ok(hit) => hit.map(|hit| hit.point.y),
            Err(err) => {
                log::trace!("terrain query at ({}, {}) failed: {err}", point.x, point.z);
                None
            }
        }
    }

    /// Resample below the target focus and the camera.
    ///
    /// The focus sample sets the height outright. The camera sample can only
    /// raise it, so a camera hovering over a hill is lifted with it.
    pub fn sample<S: SceneQuery + ?Sized>(&mut self, scene: &S, focus: Vec3, camera: Vec3) -> f32 {
        if let Some(height) = self.ground_at(scene, focus) {
            self.height = height;
        }

        if let Some(height) = self.ground_at(scene, camera) {
            if height > self.height {
                self.height = height;
            }
        }

        self.height
    }
}
