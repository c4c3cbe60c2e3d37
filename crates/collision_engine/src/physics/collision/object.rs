//! Collidable game objects
//!
//! A [`GameObject`] is an immutable snapshot of one named collider: where it
//! is and what shape it has. Boxes are axis-aligned; there is no rotation.

use serde::{Deserialize, Serialize};

use crate::error::{CollisionError, CollisionResult};
use crate::foundation::math::{Vec3, Vec4};

/// Coarse shape category, used to pick a shape test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// Axis-aligned box
    Cube,
    /// Half-space boundary along x or z
    Plane,
    /// Sphere
    Sphere,
}

/// Axis a plane bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneAxis {
    /// Boundary at `x = boundary`, unbounded along z
    X,
    /// Boundary at `z = boundary`, unbounded along x
    Z,
}

/// Half-space plane
///
/// The sign of `boundary` picks the solid side: a positive boundary blocks
/// anything reaching past it in the positive direction, a negative one
/// blocks anything reaching past it in the negative direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneDescriptor {
    /// Bounded axis
    pub axis: PlaneAxis,
    /// Boundary offset along `axis`
    pub boundary: f32,
    /// Vertical half-extent, carried for callers that draw the plane
    #[serde(default)]
    pub height: f32,
}

impl PlaneDescriptor {
    /// Creates a plane bounding `axis` at `boundary`
    pub fn new(axis: PlaneAxis, boundary: f32) -> Self {
        Self {
            axis,
            boundary,
            height: 0.0,
        }
    }

    /// Sets the vertical half-extent
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Decode the packed bbox form, where `+inf` on one horizontal axis
    /// marks the unbounded direction and the other horizontal component is
    /// the boundary.
    pub fn from_bbox(bbox: Vec3) -> CollisionResult<Self> {
        if bbox.z == f32::INFINITY && bbox.x.is_finite() {
            Ok(Self {
                axis: PlaneAxis::X,
                boundary: bbox.x,
                height: bbox.y,
            })
        } else if bbox.x == f32::INFINITY && bbox.z.is_finite() {
            Ok(Self {
                axis: PlaneAxis::Z,
                boundary: bbox.z,
                height: bbox.y,
            })
        } else {
            Err(CollisionError::InvalidPlane {
                name: String::new(),
                bbox,
            })
        }
    }

    /// Encode back into the packed bbox form
    pub fn bbox(&self) -> Vec3 {
        match self.axis {
            PlaneAxis::X => Vec3::new(self.boundary, self.height, f32::INFINITY),
            PlaneAxis::Z => Vec3::new(f32::INFINITY, self.height, self.boundary),
        }
    }
}

/// Collision geometry of an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box given by its half-extents
    Cube {
        /// Half-extents along x, y and z
        half_extents: Vec3,
    },
    /// Half-space plane
    Plane(PlaneDescriptor),
    /// Sphere
    Sphere {
        /// Sphere radius
        radius: f32,
    },
}

/// A named collider in a scene snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique name within one snapshot
    pub name: String,
    /// Center; `w` is 1 for a point
    pub position_center: Vec4,
    /// Geometry
    pub shape: Shape,
}

impl GameObject {
    /// Creates an axis-aligned box
    pub fn cube(name: impl Into<String>, position_center: Vec4, half_extents: Vec3) -> Self {
        Self {
            name: name.into(),
            position_center,
            shape: Shape::Cube { half_extents },
        }
    }

    /// Creates a half-space plane
    pub fn plane(name: impl Into<String>, position_center: Vec4, plane: PlaneDescriptor) -> Self {
        Self {
            name: name.into(),
            position_center,
            shape: Shape::Plane(plane),
        }
    }

    /// Creates a sphere
    pub fn sphere(name: impl Into<String>, position_center: Vec4, radius: f32) -> Self {
        Self {
            name: name.into(),
            position_center,
            shape: Shape::Sphere { radius },
        }
    }

    /// Build from the flat `(type, bbox, radius)` description used by older
    /// scene files. `radius` is ignored unless `object_type` is a sphere.
    pub fn from_parts(
        name: impl Into<String>,
        object_type: ObjectType,
        position_center: Vec4,
        bbox: Vec3,
        radius: f32,
    ) -> CollisionResult<Self> {
        let name = name.into();
        let shape = match object_type {
            ObjectType::Cube => Shape::Cube { half_extents: bbox },
            ObjectType::Plane => match PlaneDescriptor::from_bbox(bbox) {
                Ok(plane) => Shape::Plane(plane),
                Err(_) => return Err(CollisionError::InvalidPlane { name, bbox }),
            },
            ObjectType::Sphere => Shape::Sphere { radius },
        };
        Ok(Self {
            name,
            position_center,
            shape,
        })
    }

    /// Stand-in for a name that is missing from a snapshot: a zero-size box
    /// at the origin.
    pub fn sentinel(name: impl Into<String>) -> Self {
        Self::cube(name, Vec4::new(0.0, 0.0, 0.0, 1.0), Vec3::zeros())
    }

    /// Returns this object moved to `position_center`
    #[must_use]
    pub fn with_position(mut self, position_center: Vec4) -> Self {
        self.position_center = position_center;
        self
    }

    /// Shape category
    pub fn object_type(&self) -> ObjectType {
        match self.shape {
            Shape::Cube { .. } => ObjectType::Cube,
            Shape::Plane(_) => ObjectType::Plane,
            Shape::Sphere { .. } => ObjectType::Sphere,
        }
    }

    /// Half-extents as a box.
    ///
    /// Planes report their packed form (one `+inf` component), spheres
    /// their bounding cube.
    pub fn bbox(&self) -> Vec3 {
        match self.shape {
            Shape::Cube { half_extents } => half_extents,
            Shape::Plane(plane) => plane.bbox(),
            Shape::Sphere { radius } => Vec3::repeat(radius),
        }
    }

    /// Sphere radius, 0 for other shapes
    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => radius,
            _ => 0.0,
        }
    }

    /// Center without the homogeneous coordinate
    pub fn center(&self) -> Vec3 {
        self.position_center.xyz()
    }
}
