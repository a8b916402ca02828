use math::float::{barycentric_lerp, Float};
use math::hcm::{Point3, Vec3};

use crate::{Interaction, Shape};
use geometry::ray::Ray;

/// An infinite plane through `p0` with unit normal `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    p0: Point3,
    normal: Vec3,
}

impl Plane {
    pub fn new(p0: Point3, normal: Vec3) -> Plane {
        Plane {
            p0,
            normal: normal.hat(),
        }
    }
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Shape for Plane {
    fn summary(&self) -> String {
        format!("Plane{{ {}, normal = {} }}", self.p0, self.normal)
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        // Plane: (p - p0) dot n = 0. With p = o + td,
        // (o + td - p0) dot n = 0  =>  t = (p0 - o) dot n / d dot n.
        // A ray parallel to the plane (d dot n = 0) never hits.
        let t = (self.p0 - r.origin)
            .dot(self.normal)
            .try_divide(r.dir.dot(self.normal))?;
        let t = r.truncated_t(t)?;
        Some(Interaction::new(r.position_at(t), t, self.normal))
    }
    fn occludes(&self, r: &Ray) -> bool {
        let t = (self.p0 - r.origin)
            .dot(self.normal)
            .try_divide(r.dir.dot(self.normal));
        match t {
            None => false,
            Some(t) => r.truncated_t(t).is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }
    pub fn from_raw(center: (f32, f32, f32), radius: f32) -> Sphere {
        let (x, y, z) = center;
        let has_nan = x.is_nan() || y.is_nan() || z.is_nan() || radius.is_nan();
        assert!(!has_nan);
        Self::new(Point3::new(x, y, z), radius)
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Roots of the intersection quadratic, smaller first. With the ray direction being
    /// unit-length, |o + td - c|^2 = radius^2 expands to t^2 + Bt + C = 0 where
    /// B = 2 d dot (o-c) and C = |o-c|^2 - radius^2.
    fn quadratic_roots(&self, r: &Ray) -> Option<(f32, f32)> {
        let f = r.origin - self.center; // vector connecting the sphere center to ray origin.
        let b = 2.0 * r.dir.dot(f);
        let c = f.norm_squared() - self.radius * self.radius;
        let delta = b * b - 4.0 * c;
        if delta < 0.0 {
            None
        } else {
            let sqrt_delta = delta.sqrt();
            Some(((-b - sqrt_delta) * 0.5, (-b + sqrt_delta) * 0.5))
        }
    }
}

impl Shape for Sphere {
    fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        let (t_low, t_high) = self.quadratic_roots(r)?;
        // Keeps only the roots inside the ray's extent and picks the nearer one.
        let ray_t = match (r.truncated_t(t_low), r.truncated_t(t_high)) {
            (Some(low), _) => low,
            (None, Some(high)) => high,
            (None, None) => return None,
        };
        let pos = r.position_at(ray_t);
        let normal = (pos - self.center).hat();
        Some(Interaction::new(pos, ray_t, normal))
    }
    fn occludes(&self, r: &Ray) -> bool {
        match self.quadratic_roots(r) {
            None => false,
            Some((t_low, t_high)) => {
                r.truncated_t(t_low).is_some() || r.truncated_t(t_high).is_some()
            }
        }
    }
}

/// A triangle over vertices `p0, p1, p2`, optionally with one normal per vertex for smooth
/// shading. Without vertex normals the flat face normal is used.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    p0: Point3,
    p1: Point3,
    p2: Point3,
    normals: Option<[Vec3; 3]>,
}

impl Triangle {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self {
            p0,
            p1,
            p2,
            normals: None,
        }
    }
    pub fn with_normals(self, n0: Vec3, n1: Vec3, n2: Vec3) -> Self {
        Self {
            normals: Some([n0.hat(), n1.hat(), n2.hat()]),
            ..self
        }
    }
    pub fn vertices(&self) -> (Point3, Point3, Point3) {
        (self.p0, self.p1, self.p2)
    }

    /// Solves o + td = a*p0 + b*p1 + (1-a-b)*p2 as a 3x3 linear system over (t, a, b) with
    /// Cramer's rule; the determinants are scalar triple products of the ray direction, the
    /// edges p2-p0 and p2-p1, and the right-hand side p2-o.
    fn barycentric_solve(&self, r: &Ray) -> Option<(f32, f32, f32)> {
        let e0 = self.p2 - self.p0;
        let e1 = self.p2 - self.p1;
        let s = self.p2 - r.origin;

        let denom = r.dir.dot(e0.cross(e1));
        if denom.abs() < f32::EPSILON {
            // Degenerate triangle or edge-on ray; the division would be unstable.
            return None;
        }
        let t = s.dot(e0.cross(e1)) / denom;
        let a = r.dir.dot(s.cross(e1)) / denom;
        let b = r.dir.dot(e0.cross(s)) / denom;
        if a < 0.0 || b < 0.0 || a + b > 1.0 {
            return None;
        }
        Some((t, a, b))
    }
}

impl Shape for Triangle {
    fn summary(&self) -> String {
        format!("Triangle{{ {}, {}, {} }}", self.p0, self.p1, self.p2)
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        let (t, a, b) = self.barycentric_solve(r)?;
        let t = r.truncated_t(t)?;
        let normal = match self.normals {
            Some([n0, n1, n2]) => barycentric_lerp((n0, n1, n2), (a, b, 1.0 - a - b)).hat(),
            None => (self.p2 - self.p0).cross(self.p2 - self.p1).hat(),
        };
        Some(Interaction::new(r.position_at(t), t, normal))
    }
    fn occludes(&self, r: &Ray) -> bool {
        match self.barycentric_solve(r) {
            None => false,
            Some((t, _, _)) => r.truncated_t(t).is_some(),
        }
    }
}
