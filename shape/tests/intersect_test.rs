use geometry::ray::Ray;
use math::hcm::{point3, vec3, Point3, Vec3};
use math::{assert_ge, assert_gt, assert_le};
use shape::{Plane, Shape, Sphere, Triangle};

#[test]
fn sphere_through_center() {
    let sphere = Sphere::new(Point3::ORIGIN, 1.0);
    let ray = Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
    let isect = sphere.intersect(&ray).expect("head-on ray must hit");
    // The near root: distance to the center minus the radius.
    assert!((isect.ray_t - 4.0).abs() < 1e-4, "t = {}", isect.ray_t);
    assert!(isect.pos.distance_to(point3(0.0, 0.0, 1.0)) < 1e-4);
    assert!((isect.normal - Vec3::Z).norm() < 1e-4);
    // The hit lies on the sphere's surface.
    assert!((isect.pos.distance_to(sphere.center()) - sphere.radius()).abs() < 1e-4);
    assert!(sphere.occludes(&ray));
}

#[test]
fn sphere_from_inside_uses_far_root() {
    let sphere = Sphere::new(Point3::ORIGIN, 1.0);
    let ray = Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, -1.0));
    let isect = sphere.intersect(&ray).unwrap();
    assert!((isect.ray_t - 1.0).abs() < 1e-4);
    // The normal still points outward, back at the ray origin's side.
    assert!((isect.normal - vec3(0.0, 0.0, -1.0)).norm() < 1e-4);
}

#[test]
fn sphere_grazing_miss() {
    let sphere = Sphere::new(Point3::ORIGIN, 1.0);
    let ray = Ray::new(point3(0.0, 1.5, 5.0), vec3(0.0, 0.0, -1.0));
    assert!(sphere.intersect(&ray).is_none());
    assert!(!sphere.occludes(&ray));
}

#[test]
fn sphere_behind_ray_origin_misses() {
    let sphere = Sphere::new(Point3::ORIGIN, 1.0);
    let ray = Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0));
    assert!(sphere.intersect(&ray).is_none());
}

#[test]
fn plane_parallel_ray_misses() {
    let plane = Plane::new(point3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0));
    // A ray living inside the plane, and one parallel above it: neither intersects.
    let inside = Ray::new(point3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0));
    let above = Ray::new(point3(0.0, 3.0, 0.0), vec3(1.0, 0.0, 0.0));
    assert!(plane.intersect(&inside).is_none());
    assert!(plane.intersect(&above).is_none());
    assert!(!plane.occludes(&inside));
}

#[test]
fn plane_head_on_hit() {
    let plane = Plane::new(point3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0));
    let ray = Ray::new(point3(0.0, 4.0, 0.0), vec3(0.0, -1.0, 0.0));
    let isect = plane.intersect(&ray).unwrap();
    assert!((isect.ray_t - 3.0).abs() < 1e-4);
    assert!((isect.normal - plane.normal()).norm() < 1e-6);
}

#[test]
fn triangle_interior_hit_and_flat_normal() {
    let triangle = Triangle::new(
        Point3::ORIGIN,
        point3(1.0, 0.0, 0.0),
        point3(0.0, 1.0, 0.0),
    );
    let ray = Ray::new(point3(0.25, 0.25, 1.0), vec3(0.0, 0.0, -1.0));
    let isect = triangle.intersect(&ray).unwrap();
    assert!((isect.ray_t - 1.0).abs() < 1e-4);
    assert!(isect.pos.distance_to(point3(0.25, 0.25, 0.0)) < 1e-4);
    assert!((isect.normal.norm() - 1.0).abs() < 1e-6);
    // Flat normal is perpendicular to the triangle's plane.
    assert!(isect.normal.cross(Vec3::Z).norm() < 1e-6);
}

#[test]
fn triangle_outside_misses() {
    let triangle = Triangle::new(
        Point3::ORIGIN,
        point3(1.0, 0.0, 0.0),
        point3(0.0, 1.0, 0.0),
    );
    // (0.9, 0.9) is beyond the diagonal edge: a + b would exceed 1.
    let ray = Ray::new(point3(0.9, 0.9, 1.0), vec3(0.0, 0.0, -1.0));
    assert!(triangle.intersect(&ray).is_none());
    assert!(!triangle.occludes(&ray));
}

#[test]
fn triangle_degenerate_misses() {
    // All three vertices on one line: the system is singular.
    let triangle = Triangle::new(
        Point3::ORIGIN,
        point3(1.0, 1.0, 1.0),
        point3(2.0, 2.0, 2.0),
    );
    let ray = Ray::new(point3(1.0, 1.0, 5.0), vec3(0.0, 0.0, -1.0));
    assert!(triangle.intersect(&ray).is_none());
}

#[test]
fn triangle_interpolates_vertex_normals() {
    let (n0, n1, n2) = (
        vec3(1.0, 0.0, 1.0).hat(),
        vec3(-1.0, 0.0, 1.0).hat(),
        vec3(0.0, 0.0, 1.0),
    );
    let triangle = Triangle::new(
        Point3::ORIGIN,
        point3(1.0, 0.0, 0.0),
        point3(0.0, 1.0, 0.0),
    )
    .with_normals(n0, n1, n2);
    // Hit point (0.01, 0.01): barycentrics a = 0.98 towards p0, b = 0.01, c = 0.01.
    let ray = Ray::new(point3(0.01, 0.01, 1.0), vec3(0.0, 0.0, -1.0));
    let isect = triangle.intersect(&ray).unwrap();
    let expected = (n0 * 0.98 + n1 * 0.01 + n2 * 0.01).hat();
    assert!(
        (isect.normal - expected).norm() < 1e-4,
        "normal = {}, expected = {}",
        isect.normal,
        expected
    );
    assert!((isect.normal.norm() - 1.0).abs() < 1e-6);
}

#[test]
fn hits_stay_inside_the_queried_extent() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Sphere::new(point3(0.0, 0.0, -3.0), 1.2)),
        Box::new(Plane::new(point3(0.0, 0.0, -5.0), vec3(0.3, 0.2, 1.0))),
        Box::new(Triangle::new(
            point3(-2.0, -2.0, -4.0),
            point3(2.0, -2.0, -4.0),
            point3(0.0, 3.0, -4.5),
        )),
    ];
    let ray = Ray::new(Point3::ORIGIN, vec3(0.05, -0.02, -1.0)).with_extent(30.0);
    for shape in shapes.iter() {
        let isect = shape
            .intersect(&ray)
            .unwrap_or_else(|| panic!("{} should be hit", shape.summary()));
        assert_gt!(isect.ray_t, ray.t_min);
        assert_le!(isect.ray_t, ray.t_max);
        assert!((isect.normal.norm() - 1.0).abs() < 1e-6);
        assert!(shape.occludes(&ray));
    }
}

#[test]
fn tightened_extent_excludes_far_hits() {
    let sphere = Sphere::new(point3(0.0, 0.0, -10.0), 1.0);
    let ray = Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, -1.0));
    assert_ge!(sphere.intersect(&ray).unwrap().ray_t, 9.0 - 1e-4);
    let shortened = ray.with_extent(5.0);
    assert!(sphere.intersect(&shortened).is_none());
    assert!(!sphere.occludes(&shortened));
}
