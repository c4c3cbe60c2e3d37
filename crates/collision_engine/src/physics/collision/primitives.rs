//! Pairwise shape tests
//!
//! All tests are strict: shapes that only touch do not collide.

use super::object::{GameObject, PlaneAxis, Shape};
use crate::foundation::math::{utils, Vec4};

/// Box-box overlap on all three axes
pub fn cube_cube(a: &GameObject, b: &GameObject) -> bool {
    let delta = a.center() - b.center();
    let reach = a.bbox() + b.bbox();
    (0..3).all(|axis| delta[axis].abs() < reach[axis])
}

/// Box against a half-space plane
///
/// A positive boundary is crossed by the box's far face, a negative one by
/// its near face. Returns `false` when `plane` is not a plane.
pub fn cube_plane(cube: &GameObject, plane: &GameObject) -> bool {
    let Shape::Plane(descriptor) = plane.shape else {
        return false;
    };

    let axis = match descriptor.axis {
        PlaneAxis::X => 0,
        PlaneAxis::Z => 2,
    };
    let center = cube.position_center[axis];
    let half = cube.bbox()[axis];
    let boundary = descriptor.boundary;

    (boundary > 0.0 && center + half > boundary) || (boundary < 0.0 && center - half < boundary)
}

/// Box against a sphere, using the closest point on the box to the sphere's center
pub fn cube_sphere(cube: &GameObject, sphere: &GameObject) -> bool {
    let closest = closest_point_to_center(cube, sphere);
    (closest.xyz() - sphere.center()).norm() < sphere.radius()
}

/// Closest point on (or inside) `bounds` to the center of `other`
///
/// Each axis of `other`'s center is clamped to `bounds`' extent. The result
/// is a point (`w = 1`).
pub fn closest_point_to_center(bounds: &GameObject, other: &GameObject) -> Vec4 {
    utils::clamp_to_box(other.center(), bounds.center(), bounds.bbox()).push(1.0)
}
