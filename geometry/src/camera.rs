use crate::ray;
use math::hcm;

/// Left-handed coordinate system pinhole camera: x rightward, y upward, z forward.
///
/// Rays are indexed by normalized film coordinates (x, y) in [0, 1] x [0, 1] with (0, 0) at the
/// lower-left corner; the caller converts pixel rows (top-left origin) to film coordinates.
pub struct Camera {
    center: hcm::Point3,
    a: hcm::Vec3,
    b: hcm::Vec3,
    c: hcm::Vec3,
}

impl Camera {
    pub fn new(fov_y: math::Angle, aspect_ratio: f32) -> Camera {
        let half_vertical = (fov_y * 0.5).tan();
        let half_horizontal = half_vertical * aspect_ratio;

        Camera {
            center: hcm::Point3::ORIGIN,
            a: hcm::Vec3::new(2.0 * half_horizontal, 0.0, 0.0),
            b: hcm::Vec3::new(0.0, 2.0 * half_vertical, 0.0),
            c: hcm::Vec3::new(-half_horizontal, -half_vertical, 1.0),
        }
    }

    pub fn looking_at(self, from: hcm::Point3, target: hcm::Point3, up: hcm::Vec3) -> Self {
        let forward = (target - from).hat(); // new z-axis
        let right = (up.cross(forward)).hat(); // new x-axis, equals to cross(y, z)
        let up = forward.cross(right); // adjusted y-axis, equals to cross(z, x)

        let orientation = hcm::Mat3::from_cols(right, up, forward);
        Self {
            center: from,
            a: orientation * self.a,
            b: orientation * self.b,
            c: orientation * self.c,
        }
    }

    /// Shoots the ray through normalized film coordinates (x, y).
    pub fn ray_at(&self, x: f32, y: f32) -> ray::Ray {
        let dir = self.c + self.a * x + self.b * y;
        ray::Ray::new(self.center, dir)
    }
}
