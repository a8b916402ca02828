/// Defines useful functions for common math operations and tools:
/// - Simple interpolation and barycentric interpolation on not only primitive types,
/// - The `Float` helper trait (`cathetus`, `try_divide`),
/// - Macros to check if two math quantities are less than / greater than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 3x3 matrices.
/// - Functions `reflect()` and `refract()` to compute surface interactions.
pub mod hcm;

pub use float::Angle;
pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
