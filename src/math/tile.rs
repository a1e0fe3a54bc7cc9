use glam::{Vec2, Vec3};

/// Selects the terrain tiles whose geometry can lie under a point.
///
/// Tile origins are their minimum corner, so a tile at `o` is a candidate for
/// `p` when `o` lies in the half-open interval `[p - size, p)` on both x and z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileFilter {
    pub point: Vec3,
    pub tile_size: Vec2,
}

impl TileFilter {
    pub fn new(point: Vec3, tile_size: Vec2) -> Self {
        Self { point, tile_size }
    }

    pub fn contains(&self, tile_origin: Vec3) -> bool {
        between(tile_origin.x, self.point.x - self.tile_size.x, self.point.x)
            && between(tile_origin.z, self.point.z - self.tile_size.y, self.point.z)
    }
}

fn between(n: f32, min: f32, max: f32) -> bool {
    n >= min && n < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_under_point() {
        let filter = TileFilter::new(Vec3::new(10.0, 0.0, 10.0), Vec2::splat(32.0));
        assert!(filter.contains(Vec3::new(0.0, 0.0, 0.0)));
        assert!(!filter.contains(Vec3::new(32.0, 0.0, 0.0)));
        assert!(!filter.contains(Vec3::new(-32.0, 0.0, 0.0)));
    }

    #[test]
    fn test_half_open_bounds() {
        let filter = TileFilter::new(Vec3::new(32.0, 0.0, 32.0), Vec2::splat(32.0));
        // Lower bound inclusive
        assert!(filter.contains(Vec3::new(0.0, 0.0, 0.0)));
        // Upper bound exclusive
        assert!(!filter.contains(Vec3::new(32.0, 0.0, 0.0)));
        assert!(!filter.contains(Vec3::new(0.0, 0.0, 32.0)));
    }

    #[test]
    fn test_non_square_tiles() {
        let filter = TileFilter::new(Vec3::new(5.0, 0.0, 5.0), Vec2::new(8.0, 64.0));
        assert!(filter.contains(Vec3::new(0.0, 0.0, -50.0)));
        assert!(!filter.contains(Vec3::new(-8.0, 0.0, 0.0)));
    }

    #[test]
    fn test_height_is_ignored() {
        let filter = TileFilter::new(Vec3::new(5.0, 1000.0, 5.0), Vec2::splat(16.0));
        assert!(filter.contains(Vec3::new(0.0, -200.0, 0.0)));
    }
}
