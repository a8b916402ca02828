use geometry::camera::Camera;
use geometry::ray::Ray;
use math::hcm::{point3, vec3, Point3, Vec3};

#[test]
fn center_ray_goes_through_the_target() {
    let from = point3(1.0, 2.0, -3.0);
    let target = point3(0.0, 1.0, 4.0);
    let camera = Camera::new(math::new_deg(60.0), 16.0 / 9.0).looking_at(from, target, Vec3::Y);
    let ray = camera.ray_at(0.5, 0.5);
    assert!(ray.origin.distance_to(from) < 1e-5);
    let to_target = (target - from).hat();
    assert!(
        (ray.dir - to_target).norm() < 1e-4,
        "dir = {}, expected {}",
        ray.dir,
        to_target
    );
}

#[test]
fn rays_are_unit_length_across_the_film() {
    let camera = Camera::new(math::new_deg(75.0), 4.0 / 3.0).looking_at(
        point3(0.0, 2.0, -5.0),
        Point3::ORIGIN,
        Vec3::Y,
    );
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.3, 0.8)]
        .iter()
        .copied()
    {
        let ray = camera.ray_at(x, y);
        assert!((ray.dir.norm() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn film_coordinates_map_up_and_right() {
    // Default pose: +x is right, +y is up, looking down +z.
    let camera = Camera::new(math::new_deg(90.0), 1.0);
    let left = camera.ray_at(0.0, 0.5);
    let right = camera.ray_at(1.0, 0.5);
    let bottom = camera.ray_at(0.5, 0.0);
    let top = camera.ray_at(0.5, 1.0);
    assert!(left.dir.x < 0.0 && right.dir.x > 0.0);
    assert!(bottom.dir.y < 0.0 && top.dir.y > 0.0);
}

#[test]
fn truncated_t_is_exclusive_at_both_ends() {
    let ray = Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, 1.0)).with_extent(10.0);
    assert_eq!(ray.truncated_t(ray.t_min), None);
    assert_eq!(ray.truncated_t(10.0), None);
    assert_eq!(ray.truncated_t(5.0), Some(5.0));
    assert_eq!(ray.truncated_t(-2.0), None);
    assert!((ray.position_at(5.0).distance_to(point3(0.0, 0.0, 5.0))) < 1e-6);
}
