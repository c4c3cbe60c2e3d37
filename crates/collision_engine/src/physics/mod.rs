//! Physics module for collision detection and response
//!
//! Provides overlap queries for boxes, half-space planes and spheres, and a
//! movement clamp that keeps an object from pushing further into whatever
//! it touches. There is no broad phase: a query checks every object in the
//! snapshot.

pub mod collision;
pub mod collision_rules;
pub mod collision_system;

#[cfg(test)]
mod tests;

pub use collision::{GameObject, ObjectType, PlaneAxis, PlaneDescriptor, Shape, XZDirection};
pub use collision_rules::{CollisionRules, ExclusionPair};
pub use collision_system::CollisionSystem;
