use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Distance below which an intersection is considered a self-intersection of the surface the
/// ray was spawned from, and discarded.
pub const RAY_EPSILON: f32 = 1e-4;

/// Represents a ray:
///
///   origin + t * direction
///
/// where t is positive. The direction is normalized on construction.
///
/// The extent of the ray is the open interval (`t_min`, `t_max`): `t_min` defaults to a small
/// epsilon that suppresses self-intersection of rays spawned from a surface, and `t_max` defaults
/// to infinite but can be tightened to accelerate intersection tests or bound a shadow query.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir: dir.hat(),
            t_min: RAY_EPSILON,
            t_max: f32::INFINITY,
        }
    }
    pub fn set_extent(&mut self, t_max: f32) {
        self.t_max = t_max;
    }

    pub fn with_extent(self, t_max: f32) -> Self {
        Ray { t_max, ..self }
    }
    /// Returns `None` if the given `t` is outside the ray's extent (`t_min`, `t_max`).
    /// `Some(t)` otherwise.
    pub fn truncated_t(&self, t: f32) -> Option<f32> {
        if t <= self.t_min || t >= self.t_max {
            None
        } else {
            Some(t)
        }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}
