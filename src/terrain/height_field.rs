use glam::{Vec2, Vec3};

use crate::camera::CameraPose;
use crate::error::SceneError;
use crate::math::{intersect_aabb, Ray, TileFilter, Triangle, AABB};
use crate::traits::{RayHit, SceneQuery};

/// One tile of height geometry. `origin` is the tile's minimum x/z corner.
#[derive(Debug, Clone)]
pub struct HeightTile {
    pub origin: Vec3,
    triangles: Vec<Triangle>,
    bounds: Option<AABB>,
}

impl HeightTile {
    pub fn new(origin: Vec3, triangles: Vec<Triangle>) -> Self {
        let bounds = AABB::from_points(triangles.iter().flat_map(|t| [t.v0, t.v1, t.v2]));
        Self {
            origin,
            triangles,
            bounds,
        }
    }

    /// Regular grid mesh over `[origin, origin + size]` with `resolution`
    /// quads per side. `height(x, z)` gives the world height at a vertex.
    pub fn from_heights(
        origin: Vec3,
        size: Vec2,
        resolution: usize,
        height: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let resolution = resolution.max(1);
        let step = size / resolution as f32;
        let vertex = |i: usize, j: usize| {
            let x = origin.x + i as f32 * step.x;
            let z = origin.z + j as f32 * step.y;
            Vec3::new(x, height(x, z), z)
        };

        let triangles = (0..resolution)
            .flat_map(|i| (0..resolution).map(move |j| (i, j)))
            .flat_map(|(i, j)| {
                let a = vertex(i, j);
                let b = vertex(i + 1, j);
                let c = vertex(i, j + 1);
                let d = vertex(i + 1, j + 1);
                [Triangle::new(a, c, b), Triangle::new(b, c, d)]
            })
            .collect();

        Self::new(origin, triangles)
    }

    pub fn flat(origin: Vec3, size: Vec2) -> Self {
        Self::from_heights(origin, size, 1, |_, _| origin.y)
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }

    fn intersect(&self, ray: &Ray, near: f32, far: f32) -> Option<f32> {
        let bounds = self.bounds?;
        intersect_aabb(ray, &bounds)?;

        self.triangles
            .iter()
            .filter_map(|triangle| triangle.intersect(ray))
            .filter(|t| (near..=far).contains(t))
            .min_by(f32::total_cmp)
    }
}

/// Tiled triangle height field that answers the controls' ray queries.
#[derive(Debug, Clone, Default)]
pub struct HeightField {
    tiles: Vec<HeightTile>,
    bounds: Option<AABB>,
    pose: Option<CameraPose>,
}

impl HeightField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `tiles_x` by `tiles_z` block of tiles starting at `min_corner`.
    pub fn from_fn(
        min_corner: Vec2,
        tile_size: Vec2,
        tiles_x: usize,
        tiles_z: usize,
        resolution: usize,
        height: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let mut field = Self::new();
        for tx in 0..tiles_x {
            for tz in 0..tiles_z {
                let corner = min_corner + Vec2::new(tx as f32, tz as f32) * tile_size;
                let origin = Vec3::new(corner.x, 0.0, corner.y);
                field.add_tile(HeightTile::from_heights(origin, tile_size, resolution, &height));
            }
        }
        field
    }

    pub fn add_tile(&mut self, tile: HeightTile) {
        self.bounds = match (self.bounds, tile.bounds()) {
            (Some(field), Some(tile)) => Some(field.union(&tile)),
            (field, tile) => field.or(tile),
        };
        self.tiles.push(tile);
    }

    /// Box around every tile's geometry.
    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }

    pub fn tiles(&self) -> &[HeightTile] {
        &self.tiles
    }

    /// The pose most recently written by the controls.
    pub fn camera_pose(&self) -> Option<&CameraPose> {
        self.pose.as_ref()
    }
}

impl SceneQuery for HeightField {
    fn cast_ray(
        &self,
        ray: &Ray,
        tiles: &TileFilter,
        near: f32,
        far: f32,
    ) -> Result<Option<RayHit>, SceneError> {
        if self.tiles.is_empty() {
            return Err(SceneError::NotReady);
        }
        if !ray.direction.is_finite() || ray.direction.length_squared() == 0.0 {
            return Err(SceneError::DegenerateRay(ray.direction.to_array()));
        }
        if self.bounds.map_or(true, |bounds| intersect_aabb(ray, &bounds).is_none()) {
            return Ok(None);
        }

        let closest = self
            .tiles
            .iter()
            .filter(|tile| tiles.contains(tile.origin))
            .filter_map(|tile| tile.intersect(ray, near, far))
            .min_by(f32::total_cmp);

        Ok(closest.map(|distance| RayHit {
            point: ray.point_at(distance),
            distance,
        }))
    }

    fn write_camera_pose(&mut self, pose: &CameraPose) {
        self.pose = Some(*pose);
    }
}
