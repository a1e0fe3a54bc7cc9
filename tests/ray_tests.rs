use glam::{Vec2, Vec3};
use map_camera::math::{intersect_aabb, rotate_2d, Ray, Triangle, AABB};

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_above() {
        let ray = Ray::down(Vec3::new(5.0, 300.0, 5.0));
        let aabb = AABB::new(Vec3::new(0.0, 40.0, 0.0), Vec3::new(10.0, 80.0, 10.0));

        let t = intersect_aabb(&ray, &aabb).expect("Ray should hit AABB");

        assert!((t - 220.0).abs() < 0.001, "Hit distance should be ~220.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_aabb_beside_it() {
        let ray = Ray::down(Vec3::new(15.0, 300.0, 5.0));
        let aabb = AABB::new(Vec3::new(0.0, 40.0, 0.0), Vec3::new(10.0, 80.0, 10.0));

        assert!(intersect_aabb(&ray, &aabb).is_none(), "Ray should miss AABB");
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let ray = Ray::down(Vec3::new(5.0, 60.0, 5.0));
        let aabb = AABB::new(Vec3::new(0.0, 40.0, 0.0), Vec3::new(10.0, 80.0, 10.0));

        let t = intersect_aabb(&ray, &aabb).expect("Ray inside AABB should hit");

        assert!((t - 20.0).abs() < 0.001, "Should return exit distance, got {}", t);
    }

    #[test]
    fn test_aabb_behind_ray_is_missed() {
        let ray = Ray::down(Vec3::new(5.0, 10.0, 5.0));
        let aabb = AABB::new(Vec3::new(0.0, 40.0, 0.0), Vec3::new(10.0, 80.0, 10.0));

        assert!(intersect_aabb(&ray, &aabb).is_none(), "Box above a downward ray is behind it");
    }

    #[test]
    fn test_flat_aabb_is_hit() {
        let ray = Ray::down(Vec3::new(1.0, 300.0, 1.0));
        let aabb = AABB::new(Vec3::new(0.0, 100.0, 0.0), Vec3::new(2.0, 100.0, 2.0));

        let t = intersect_aabb(&ray, &aabb).expect("Zero-height box should still be hit");

        assert!((t - 200.0).abs() < 0.001);
    }
}

#[cfg(test)]
mod ray_triangle_tests {
    use super::*;

    fn sloped_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        )
    }

    #[test]
    fn test_hit_on_slope() {
        let ray = Ray::down(Vec3::new(4.0, 300.0, 2.0));

        let t = sloped_triangle().intersect(&ray).expect("Ray should hit triangle");
        let point = ray.point_at(t);

        assert!((point.y - 4.0).abs() < 0.001, "Slope height should be x, got {}", point.y);
    }

    #[test]
    fn test_miss_outside_triangle() {
        let ray = Ray::down(Vec3::new(8.0, 300.0, 8.0));
        assert!(sloped_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let flat = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        );
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 2.0), Vec3::X);
        assert!(flat.intersect(&ray).is_none(), "Ray in the triangle plane should miss");
    }
}

#[cfg(test)]
mod rotate_tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_quarter_turn() {
        let v = rotate_2d(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!((v - Vec2::new(0.0, 1.0)).length() < 1e-6, "got {:?}", v);
    }

    #[test]
    fn test_rotation_keeps_length() {
        let v = Vec2::new(3.0, -4.0);
        for i in 0..16 {
            let angle = i as f32 * 0.41;
            assert!((rotate_2d(v, angle).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_inverse_rotation() {
        let v = Vec2::new(7.0, 2.0);
        let back = rotate_2d(rotate_2d(v, 1.1), -1.1);
        assert!((back - v).length() < 1e-4);
    }
}
