use geometry::ray::Ray;
use math::hcm::{Point3, Vec3};
use std::fmt::{Display, Formatter, Result};

/// Contains geometric information on a ray-surface intersection:
///  - `pos`: position of intersection
///  - `ray_t`: t-value of the ray at the intersection, strictly inside the ray's extent.
///  - `normal`: unit normal vector of the surface.
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    pub pos: Point3,
    pub ray_t: f32,
    pub normal: Vec3,
}

impl Interaction {
    pub fn new(pos: Point3, ray_t: f32, normal: Vec3) -> Interaction {
        Interaction { pos, ray_t, normal }
    }

    /// Starts a new ray from the intersection position. The new ray's own `t_min` epsilon
    /// keeps it from re-hitting the surface it starts on.
    pub fn spawn_ray(&self, dir: Vec3) -> Ray {
        Ray::new(self.pos, dir)
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "pos = {}, t = {:.2}, normal = {}",
            self.pos, self.ray_t, self.normal
        )
    }
}
