use geometry::camera::Camera;
use itertools::iproduct;
use light::DeltaLight;
use material::Material;
use math::float::lerp;
use math::hcm::{point3, vec3, Point3, Vec3};
use radiometry::color::Color;
use shape::{Plane, Sphere};

use crate::{obj, Primitive, Scene};

fn rand_f32() -> f32 {
    rand::random::<f32>()
}

pub fn names() -> &'static [&'static str] {
    &["spheres", "sphere_field", "mesh"]
}

/// Builds a preset scene and its camera. The camera aspect ratio comes from the caller since
/// it depends on the output resolution.
pub fn by_name(name: &str, aspect_ratio: f32) -> Option<(Scene, Camera)> {
    match name {
        "spheres" => Some(spheres(aspect_ratio)),
        "sphere_field" => Some(sphere_field(aspect_ratio)),
        "mesh" => Some(mesh(aspect_ratio)),
        _ => None,
    }
}

/// Three spheres over a ground plane: one matte, one mirror, one glass.
fn spheres(aspect_ratio: f32) -> (Scene, Camera) {
    let primitives = vec![
        Primitive::from_raw(
            Plane::new(Point3::ORIGIN, Vec3::Y),
            Material::matte(Color::gray(0.5), Color::new(0.45, 0.5, 0.42)),
        ),
        Primitive::from_raw(
            Sphere::new(point3(-1.6, 0.8, 5.0), 0.8),
            Material::plastic(
                Color::new(0.7, 0.15, 0.12),
                Color::new(0.7, 0.15, 0.12),
                Color::gray(0.5),
                24.0,
            ),
        ),
        Primitive::from_raw(
            Sphere::new(point3(0.0, 1.0, 6.2), 1.0),
            Material::mirror(Color::gray(0.9)),
        ),
        Primitive::from_raw(
            Sphere::new(point3(1.6, 0.7, 4.2), 0.7),
            Material::glass(Color::gray(0.85), 1.5),
        ),
    ];
    let lights = vec![
        DeltaLight::point(point3(3.0, 6.0, 1.0), Color::gray(40.0)),
        DeltaLight::distant(vec3(-0.4, 1.0, -0.3), Color::gray(0.3)),
    ];
    let scene = Scene::new(primitives)
        .with_lights(lights)
        .with_ambient(Color::gray(0.08))
        .with_background(Color::new(0.45, 0.63, 0.9))
        .with_exposure(1.0)
        .with_max_depth(5);
    let camera = Camera::new(math::new_deg(55.0), aspect_ratio).looking_at(
        point3(0.0, 1.5, -1.5),
        point3(0.0, 0.9, 5.0),
        Vec3::Y,
    );
    (scene, camera)
}

/// A grid of small tinted spheres with the occasional mirror thrown in.
fn sphere_field(aspect_ratio: f32) -> (Scene, Camera) {
    let mut primitives = vec![Primitive::from_raw(
        Plane::new(Point3::ORIGIN, Vec3::Y),
        Material::matte(Color::gray(0.5), Color::gray(0.55)),
    )];
    let warm = Color::rgb(217, 76, 51);
    let cool = Color::rgb(51, 102, 217);
    for (i, j) in iproduct!(0..8, 0..8) {
        let radius = 0.3 + 0.15 * rand_f32();
        let center = ((i as f32 - 3.5) * 1.2, radius, 3.0 + j as f32 * 1.2);
        let tint = lerp(warm, cool, (i + j) as f32 / 14.0);
        let mtl = if rand_f32() < 0.15 {
            Material::mirror(Color::gray(0.85))
        } else {
            Material::plastic(tint, tint, Color::gray(0.4), 16.0)
        };
        primitives.push(Primitive::from_raw(Sphere::from_raw(center, radius), mtl));
    }
    let lights = vec![
        DeltaLight::point(point3(0.0, 9.0, 6.0), Color::gray(70.0)),
        DeltaLight::distant(vec3(-0.3, 1.0, -0.2), Color::gray(0.25)),
    ];
    let scene = Scene::new(primitives)
        .with_lights(lights)
        .with_ambient(Color::gray(0.06))
        .with_background(Color::new(0.55, 0.65, 0.8))
        .with_max_depth(4);
    let camera = Camera::new(math::new_deg(55.0), aspect_ratio).looking_at(
        point3(0.0, 4.5, -3.0),
        point3(0.0, 0.5, 6.0),
        Vec3::Y,
    );
    (scene, camera)
}

/// An octahedron mesh, smooth-shaded, under a spot light.
const OCTAHEDRON_OBJ: &str = "\
# octahedron
v 0.0 2.4 4.0
v 0.0 0.0 4.0
v 1.2 1.2 4.0
v -1.2 1.2 4.0
v 0.0 1.2 5.2
v 0.0 1.2 2.8
f 1 5 3
f 1 4 5
f 1 6 4
f 1 3 6
f 2 3 5
f 2 5 4
f 2 4 6
f 2 6 3
";

fn mesh(aspect_ratio: f32) -> (Scene, Camera) {
    let mut primitives = vec![Primitive::from_raw(
        Plane::new(Point3::ORIGIN, Vec3::Y),
        Material::matte(Color::gray(0.5), Color::new(0.5, 0.48, 0.42)),
    )];
    let mesh_mtl = std::sync::Arc::new(Material::plastic(
        Color::new(0.15, 0.55, 0.5),
        Color::new(0.15, 0.55, 0.5),
        Color::gray(0.6),
        32.0,
    ));
    let triangles = obj::parse_obj(OCTAHEDRON_OBJ, true).expect("embedded mesh parses");
    for triangle in triangles {
        primitives.push(Primitive::new(
            std::sync::Arc::new(triangle),
            mesh_mtl.clone(),
        ));
    }
    let spot_from = point3(0.0, 6.0, 2.5);
    let spot_target = point3(0.0, 1.2, 4.0);
    let lights = vec![
        DeltaLight::spot(
            spot_from,
            spot_target - spot_from,
            math::new_deg(20.0),
            Color::gray(40.0),
        ),
        DeltaLight::distant(vec3(0.5, 1.0, -0.4), Color::gray(0.15)),
    ];
    let scene = Scene::new(primitives)
        .with_lights(lights)
        .with_ambient(Color::gray(0.06))
        .with_background(Color::new(0.14, 0.15, 0.2))
        .with_max_depth(3);
    let camera = Camera::new(math::new_deg(50.0), aspect_ratio).looking_at(
        point3(0.0, 2.2, -0.5),
        point3(0.0, 1.2, 4.0),
        Vec3::Y,
    );
    (scene, camera)
}
