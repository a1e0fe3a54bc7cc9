use glam::{Vec2, Vec3};
use map_camera::config::TerrainSettings;
use map_camera::math::{Ray, TileFilter};
use map_camera::session::{demo_terrain, DEMO_TILE_SIZE};
use map_camera::terrain::{HeightField, HeightTile, TerrainSampler};
use map_camera::traits::SceneQuery;

const TILE: Vec2 = Vec2::splat(64.0);

fn sampler() -> TerrainSampler {
    TerrainSampler::new(&TerrainSettings {
        tile_size: Some(TILE),
        ..Default::default()
    })
}

/// Planar ramp rising along x: height = 40 + x / 4.
fn ramp() -> HeightField {
    HeightField::from_fn(Vec2::splat(-128.0), TILE, 4, 4, 4, |x, _| 40.0 + x / 4.0)
}

#[cfg(test)]
mod height_field_tests {
    use super::*;

    #[test]
    fn test_tile_count() {
        assert_eq!(ramp().tiles().len(), 16);
    }

    #[test]
    fn test_ramp_height_is_exact_inside_tiles() {
        let field = ramp();
        for &(x, z) in &[(-100.0, -90.0), (-3.0, 17.0), (31.0, 99.0), (101.0, -55.0)] {
            let ray = Ray::down(Vec3::new(x, 300.0, z));
            let hit = field
                .cast_ray(&ray, &TileFilter::new(ray.origin, TILE), 1.0, 300.0)
                .expect("field has tiles")
                .expect("ray over the field should hit");
            let expected = 40.0 + x / 4.0;
            assert!(
                (hit.point.y - expected).abs() < 0.01,
                "at ({x}, {z}) expected {expected}, got {}",
                hit.point.y
            );
        }
    }

    #[test]
    fn test_tile_filter_excludes_neighbours() {
        let mut field = HeightField::new();
        field.add_tile(HeightTile::flat(Vec3::new(0.0, 50.0, 0.0), TILE));

        // The neighbouring tile's origin would be needed for a point past x = 64
        let ray = Ray::down(Vec3::new(70.0, 300.0, 10.0));
        let hit = field
            .cast_ray(&ray, &TileFilter::new(ray.origin, TILE), 1.0, 300.0)
            .unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_outside_near_far_is_missed() {
        let mut field = HeightField::new();
        field.add_tile(HeightTile::flat(Vec3::new(0.0, 299.5, 0.0), TILE));
        field.add_tile(HeightTile::flat(Vec3::new(64.0, -20.0, 0.0), TILE));

        for x in [10.0, 74.0] {
            let ray = Ray::down(Vec3::new(x, 300.0, 10.0));
            let hit = field
                .cast_ray(&ray, &TileFilter::new(ray.origin, TILE), 1.0, 300.0)
                .unwrap();
            assert!(hit.is_none(), "hit at x = {x} should be clipped");
        }
    }

    #[test]
    fn test_closest_of_overlapping_tiles() {
        let mut field = HeightField::new();
        field.add_tile(HeightTile::flat(Vec3::new(0.0, 50.0, 0.0), TILE));
        field.add_tile(HeightTile::flat(Vec3::new(0.0, 120.0, 0.0), TILE));

        let ray = Ray::down(Vec3::new(10.0, 300.0, 10.0));
        let hit = field
            .cast_ray(&ray, &TileFilter::new(ray.origin, TILE), 1.0, 300.0)
            .unwrap()
            .unwrap();
        assert!((hit.point.y - 120.0).abs() < 1e-3);
        assert!((hit.distance - 180.0).abs() < 1e-3);
    }
}

#[cfg(test)]
mod sampler_tests {
    use super::*;

    #[test]
    fn test_sample_follows_ramp() {
        let field = ramp();
        let mut sampler = sampler();

        let focus = Vec3::new(-60.0, 0.0, 10.0);
        let height = sampler.sample(&field, focus, focus + Vec3::new(0.0, 500.0, 3.0));
        assert!((height - 25.0).abs() < 0.01, "got {height}");
    }

    #[test]
    fn test_camera_over_higher_ground_lifts_height() {
        let field = ramp();
        let mut sampler = sampler();

        let focus = Vec3::new(-60.0, 0.0, 10.0);
        let camera = Vec3::new(60.0, 800.0, 10.0);
        let height = sampler.sample(&field, focus, camera);
        assert!((height - 55.0).abs() < 0.01, "got {height}");
    }

    #[test]
    fn test_off_map_keeps_last_height() {
        let field = ramp();
        let mut sampler = sampler();

        let on_map = Vec3::new(10.0, 0.0, 10.0);
        let first = sampler.sample(&field, on_map, on_map);

        let off_map = Vec3::new(1000.0, 0.0, 1000.0);
        assert_eq!(sampler.sample(&field, off_map, off_map), first);
    }

    #[test]
    fn test_demo_terrain_is_within_ray_range() {
        let field = demo_terrain();
        let settings = TerrainSettings {
            tile_size: Some(DEMO_TILE_SIZE),
            ..Default::default()
        };
        let sampler = TerrainSampler::new(&settings);

        for i in 0..20 {
            let point = Vec3::new(i as f32 * 23.3 - 227.1, 0.0, i as f32 * -17.7 + 151.3);
            let ground = sampler
                .ground_at(&field, point)
                .expect("demo terrain should cover the area around the origin");
            assert!((35.0..=85.0).contains(&ground), "demo height {ground} out of range");
        }
    }
}
