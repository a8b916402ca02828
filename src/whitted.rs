use geometry::ray::Ray;
use material::Material;
use math::hcm;
use radiometry::color::Color;
use scene::Scene;
use shape::Interaction;

/// Traces `ray` into the scene and returns the radiance it carries back.
///
/// Whitted-style transport: a specular material (one with a mirror and/or transmission
/// channel) is shaded purely by its recursive reflection/refraction branches, each weighted by
/// its channel color; everything else gets ambient plus the per-light Phong sum. `depth`
/// counts the recursive calls made so far and starts at 0; once it reaches the scene's
/// `max_depth`, specular branches stop spawning rays and contribute nothing more.
pub fn whitted_integrator(scene: &Scene, mut ray: Ray, depth: u32) -> Color {
    let (hit, mtl) = match scene.intersect(&mut ray) {
        Some(found) => found,
        None => return scene.background,
    };

    let mut color = Color::black();
    if mtl.is_specular() && depth < scene.max_depth {
        if let Some(kr) = mtl.kr {
            let reflected = hcm::reflect(-ray.dir, hit.normal);
            color += whitted_integrator(scene, hit.spawn_ray(reflected), depth + 1) * kr;
        }
        if let Some(kt) = mtl.kt {
            // Total internal reflection leaves the transmission branch dark.
            if let Some(transmitted) = hcm::refract(-ray.dir, hit.normal, mtl.ior) {
                color += whitted_integrator(scene, hit.spawn_ray(transmitted), depth + 1) * kt;
            }
        }
    } else {
        if let Some(ka) = mtl.ka {
            color += scene.ambient * ka;
        }
        color += shade_one_hit(scene, &ray, &hit, mtl);
    }
    color
}

/// Direct Phong illumination at `hit`: per light, a shadow ray bounded by the distance to the
/// light decides occlusion (hard shadows, all or nothing), then the diffuse and specular
/// terms accumulate for whichever channels the material carries. Ambient is the caller's job.
fn shade_one_hit(scene: &Scene, ray: &Ray, hit: &Interaction, mtl: &Material) -> Color {
    let mut color = Color::black();
    for light in scene.lights.iter() {
        let ls = match light.sample_at(hit.pos) {
            Some(ls) => ls,
            None => continue,
        };
        let shadow_ray = hit.spawn_ray(ls.wi).with_extent(ls.distance);
        if scene.occludes(&shadow_ray) {
            continue;
        }
        if let Some(kd) = mtl.kd {
            color += ls.intensity * kd * hit.normal.dot(ls.wi).max(0.0);
        }
        if let Some(ks) = mtl.ks {
            let r = hcm::reflect(ls.wi, hit.normal);
            color += ls.intensity * ks * r.dot(-ray.dir).max(0.0).powf(mtl.shininess);
        }
    }
    color
}
