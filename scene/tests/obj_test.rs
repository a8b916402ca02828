use math::hcm::vec3;
use scene::obj::parse_obj;

const TETRAHEDRON: &str = "\
# a regular-ish tetrahedron
v 1.0 1.0 1.0
v -1.0 -1.0 1.0
v -1.0 1.0 -1.0
v 1.0 -1.0 -1.0
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
";

#[test]
fn tetrahedron_parses_flat() {
    let triangles = parse_obj(TETRAHEDRON, false).unwrap();
    assert_eq!(triangles.len(), 4);
    let (p0, p1, p2) = triangles[0].vertices();
    assert!(p0.distance_to(math::hcm::point3(1.0, 1.0, 1.0)) < 1e-6);
    assert!(p1.distance_to(math::hcm::point3(-1.0, 1.0, -1.0)) < 1e-6);
    assert!(p2.distance_to(math::hcm::point3(-1.0, -1.0, 1.0)) < 1e-6);
}

#[test]
fn files_load_from_disk() {
    let path = std::env::temp_dir().join("whitted_rt_obj_test.obj");
    std::fs::write(&path, TETRAHEDRON).unwrap();
    let triangles = scene::obj::load_obj(path.to_str().unwrap(), false).unwrap();
    assert_eq!(triangles.len(), 4);
    std::fs::remove_file(&path).ok();

    let missing = scene::obj::load_obj("/no/such/file.obj", false).unwrap_err();
    assert!(missing.contains("can't read"), "error = {}", missing);
}

#[test]
fn smooth_normals_point_outward_on_a_tetrahedron() {
    use geometry::ray::Ray;
    use math::hcm::{point3, Point3};
    use shape::Shape;

    let triangles = parse_obj(TETRAHEDRON, true).unwrap();
    // Shoot at the first face's centroid from far along its outward direction; the
    // interpolated normal must be unit length and face back at the ray.
    let centroid = point3(-1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    let ray = Ray::new(
        Point3::from((centroid - Point3::ORIGIN) * 5.0),
        Point3::ORIGIN - centroid,
    );
    let isect = triangles[0].intersect(&ray).expect("centroid ray hits");
    assert!((isect.normal.norm() - 1.0).abs() < 1e-5);
    assert!(isect.normal.dot(centroid - Point3::ORIGIN) > 0.0);
}

#[test]
fn quads_are_fan_triangulated() {
    let quad = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
    let triangles = parse_obj(quad, false).unwrap();
    assert_eq!(triangles.len(), 2);
}

#[test]
fn file_normals_survive_the_slash_forms() {
    let text = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";
    use geometry::ray::Ray;
    use math::hcm::point3;
    use shape::Shape;

    let triangles = parse_obj(text, false).unwrap();
    assert_eq!(triangles.len(), 1);
    let ray = Ray::new(point3(0.2, 0.2, 5.0), vec3(0.0, 0.0, -1.0));
    let isect = triangles[0].intersect(&ray).unwrap();
    assert!((isect.normal - vec3(0.0, 0.0, 1.0)).norm() < 1e-6);
}

#[test]
fn negative_indices_count_from_the_end() {
    let text = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f -3 -2 -1
";
    let triangles = parse_obj(text, false).unwrap();
    assert_eq!(triangles.len(), 1);
}

#[test]
fn bad_records_name_the_line() {
    let bad_number = "v 0.0 zero 0.0";
    let error = parse_obj(bad_number, false).unwrap_err();
    assert!(error.contains("line 1"), "error = {}", error);

    let bad_index = "\
v 0.0 0.0 0.0
f 1 2 3
";
    let error = parse_obj(bad_index, false).unwrap_err();
    assert!(error.contains("line 2"), "error = {}", error);

    let short_face = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
f 1 2
";
    let error = parse_obj(short_face, false).unwrap_err();
    assert!(error.contains("line 3"), "error = {}", error);
}

#[test]
fn zero_area_faces_are_dropped() {
    let text = "\
v 0.0 0.0 0.0
v 1.0 1.0 1.0
v 2.0 2.0 2.0
f 1 2 3
";
    let triangles = parse_obj(text, false).unwrap();
    assert!(triangles.is_empty());
}
