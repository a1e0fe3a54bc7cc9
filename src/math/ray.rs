use glam::{Vec2, Vec3};

use super::AABB;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Straight down (-Y) from `origin`.
    pub fn down(origin: Vec3) -> Self {
        Self::new(origin, Vec3::NEG_Y)
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Slab test. Returns the entry distance, or the exit distance when the ray
/// starts inside the box.
pub fn intersect_aabb(ray: &Ray, aabb: &AABB) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components are clamped so the division stays finite
    let inv_dir = Vec3::new(
        if ray.direction.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray.direction.x) } else { 1.0 / ray.direction.x },
        if ray.direction.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray.direction.y) } else { 1.0 / ray.direction.y },
        if ray.direction.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray.direction.z) } else { 1.0 / ray.direction.z },
    );

    let t_min = (aabb.min - ray.origin) * inv_dir;
    let t_max = (aabb.max - ray.origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    Some(if t_near < 0.0 { t_far } else { t_near })
}

/// Rotate a 2D vector counter-clockwise by `angle` radians.
pub fn rotate_2d(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
