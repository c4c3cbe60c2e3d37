//! Math utilities and types
//!
//! Provides the vector types used by the collision queries. Positions and
//! directions are homogeneous 4-vectors: `w == 1` marks a point, `w == 0`
//! marks a direction.

pub use nalgebra::{Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Create a homogeneous point (`w = 1`)
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 1.0)
}

/// Create a homogeneous direction (`w = 0`)
pub fn direction(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 0.0)
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this never panics when `min > max`; the lower
    /// bound wins in that case.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Clamp every component of `value` into the box `[center - half, center + half]`
    pub fn clamp_to_box(value: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
        Vec3::new(
            clamp(value.x, center.x - half_extents.x, center.x + half_extents.x),
            clamp(value.y, center.y - half_extents.y, center.y + half_extents.y),
            clamp(value.z, center.z - half_extents.z, center.z + half_extents.z),
        )
    }
}
