use math::hcm::{Point3, Vec3};
use radiometry::color::Color;

/// What a light delivers to a surface point:
/// - `wi`: unit direction from the point toward the light,
/// - `distance`: distance to the light along `wi` (infinite for distant lights); shadow rays
///   are bounded by it,
/// - `intensity`: incident intensity at the point.
#[derive(Debug, Clone, Copy)]
pub struct LightSample {
    pub wi: Vec3,
    pub distance: f32,
    pub intensity: Color,
}

// Various kinds of lights.

#[derive(Debug, Clone, Copy)]
pub enum DeltaLight {
    Point {
        position: Point3,
        intensity: Color,
    },
    Distant {
        incident_direction: Vec3,
        radiance: Color,
    },
    Spot {
        position: Point3,
        axis: Vec3,
        cos_cutoff: f32,
        intensity: Color,
    },
}

impl DeltaLight {
    /// Creates a point light with the given position and intensity of the light.
    pub fn point(position: Point3, intensity: Color) -> Self {
        Self::Point {
            position,
            intensity,
        }
    }

    /// Creates a distant light with given direction and radiance. `incident_direction` points
    /// from any surface toward the light.
    /// Usually used to model massively powerful lights that are very far away (e.g., sun light).
    pub fn distant(incident_direction: Vec3, radiance: Color) -> Self {
        Self::Distant {
            incident_direction: incident_direction.hat(),
            radiance,
        }
    }

    /// Creates a spot light at `position` shining along `axis` within a cone of half-angle
    /// `cutoff`.
    pub fn spot(position: Point3, axis: Vec3, cutoff: math::Angle, intensity: Color) -> Self {
        Self::Spot {
            position,
            axis: axis.hat(),
            cos_cutoff: cutoff.cos(),
            intensity,
        }
    }

    /// Queries the light as seen from `target`. Returns `None` if the light doesn't illuminate
    /// the point at all (e.g. outside a spot light's cone); occlusion is not considered here.
    /// Point and spot intensity falls off with squared distance.
    pub fn sample_at(&self, target: Point3) -> Option<LightSample> {
        match self.clone() {
            Self::Point {
                position,
                intensity,
            } => {
                let d2 = position.squared_distance_to(target);
                Some(LightSample {
                    wi: (position - target).hat(),
                    distance: d2.sqrt(),
                    intensity: intensity * d2.recip(),
                })
            }
            Self::Distant {
                incident_direction,
                radiance,
            } => Some(LightSample {
                wi: incident_direction,
                distance: f32::INFINITY,
                intensity: radiance,
            }),
            Self::Spot {
                position,
                axis,
                cos_cutoff,
                intensity,
            } => {
                let d2 = position.squared_distance_to(target);
                let wi = (position - target).hat();
                // The cone test compares the angle between the spot axis and the
                // light-to-target direction; the boundary counts as lit.
                if (-wi).dot(axis) >= cos_cutoff {
                    Some(LightSample {
                        wi,
                        distance: d2.sqrt(),
                        intensity: intensity * d2.recip(),
                    })
                } else {
                    None
                }
            }
        }
    }
}
