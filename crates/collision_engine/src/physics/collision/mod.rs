//! Narrow-phase collision geometry
//!
//! # Module Organization
//!
//! - [`object`] - Named colliders and their shapes
//! - [`primitives`] - Pairwise overlap tests and the closest-point query
//! - [`direction`] - Compass classification of horizontal directions
//!
//! # Key Types
//!
//! - [`GameObject`] - One collider in a scene snapshot
//! - [`Shape`] - Box, half-space plane or sphere
//! - [`XZDirection`] - Dominant horizontal direction of a vector

pub mod direction;
pub mod object;
pub mod primitives;

// Re-export commonly used types
pub use direction::{closest_direction, XZDirection};
pub use object::{GameObject, ObjectType, PlaneAxis, PlaneDescriptor, Shape};
pub use primitives::{closest_point_to_center, cube_cube, cube_plane, cube_sphere};
