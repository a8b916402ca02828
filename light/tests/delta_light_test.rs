use light::DeltaLight;
use math::hcm::{point3, vec3, Point3};
use radiometry::color::Color;

#[test]
fn point_light_falls_off_with_squared_distance() {
    let light = DeltaLight::point(point3(0.0, 5.0, 0.0), Color::gray(100.0));
    let sample = light.sample_at(Point3::ORIGIN).unwrap();
    assert!((sample.distance - 5.0).abs() < 1e-5);
    assert!((sample.wi - vec3(0.0, 1.0, 0.0)).norm() < 1e-6);
    assert!((sample.intensity.r - 4.0).abs() < 1e-4);

    let closer = light.sample_at(point3(0.0, 4.0, 0.0)).unwrap();
    assert!((closer.intensity.r - 100.0).abs() < 1e-3);
}

#[test]
fn distant_light_is_uniform_and_unreachable() {
    let light = DeltaLight::distant(vec3(0.0, 2.0, 0.0), Color::gray(0.7));
    let a = light.sample_at(Point3::ORIGIN).unwrap();
    let b = light.sample_at(point3(100.0, -3.0, 42.0)).unwrap();
    assert!((a.wi - vec3(0.0, 1.0, 0.0)).norm() < 1e-6);
    assert!((a.wi - b.wi).norm() < 1e-6);
    assert!(a.distance.is_infinite());
    assert!((a.intensity.g - b.intensity.g).abs() < 1e-6);
}

#[test]
fn spot_light_cone_gates_illumination() {
    // Aims straight down with a 30-degree half-angle.
    let light = DeltaLight::spot(
        point3(0.0, 4.0, 0.0),
        vec3(0.0, -1.0, 0.0),
        math::new_deg(30.0),
        Color::gray(64.0),
    );
    // Directly below: inside the cone.
    let below = light.sample_at(Point3::ORIGIN).unwrap();
    assert!((below.wi - vec3(0.0, 1.0, 0.0)).norm() < 1e-6);
    assert!((below.intensity.b - 4.0).abs() < 1e-4);
    // 45 degrees off axis: outside.
    assert!(light.sample_at(point3(4.0, 0.0, 0.0)).is_none());
    // ~15 degrees off axis: still lit.
    assert!(light.sample_at(point3(1.0, 0.25, 0.0)).is_some());
}
