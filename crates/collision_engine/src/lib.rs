//! # Collision Engine
//!
//! Axis-aligned collision queries and movement clamping for a small
//! first-person 3D game.
//!
//! ## Features
//!
//! - **Shape Tests**: Box/box, box/half-space plane and box/sphere overlap
//! - **Scene Queries**: Which named objects a mover overlaps this frame
//! - **Compass Classification**: Dominant horizontal direction of a vector
//! - **Movement Clamping**: Cancel the part of a move that pushes into a wall
//! - **Data-Driven Rules**: Gameplay name rules loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let player = GameObject::cube("player", point(4.5, 0.0, 0.0), Vec3::repeat(1.0));
//! let east = GameObject::plane(
//!     "planeEast",
//!     point(5.0, 0.0, 0.0),
//!     PlaneDescriptor::new(PlaneAxis::X, 5.0),
//! );
//! let scene = SceneSnapshot::from_objects([player.clone(), east]).unwrap();
//!
//! let mut delta = direction(1.0, 0.0, 0.5);
//! for name in collided(&player, &scene) {
//!     delta = update_movement_direction(&player, &name, delta, &scene);
//! }
//! assert_eq!(delta, direction(0.0, 0.0, 0.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod physics;
pub mod scene;

pub use error::{CollisionError, CollisionResult};
pub use physics::collision::{closest_direction, closest_point_to_center};

use foundation::math::Vec4;
use physics::{CollisionSystem, GameObject};
use scene::SceneSnapshot;

/// Names of every object in `scene` that `query` overlaps, using the default rules
pub fn collided(query: &GameObject, scene: &SceneSnapshot) -> Vec<String> {
    CollisionSystem::shared().collided(query, scene)
}

/// Clamp `move_delta` against one collision, using the default rules
pub fn update_movement_direction(
    moving: &GameObject,
    collided_name: &str,
    move_delta: Vec4,
    scene: &SceneSnapshot,
) -> Vec4 {
    CollisionSystem::shared().update_movement_direction(moving, collided_name, move_delta, scene)
}

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        collided, update_movement_direction,
        CollisionError, CollisionResult,
        config::{Config, ConfigError, ConfigFormat},
        foundation::math::{direction, point, Vec3, Vec4},
        physics::{
            collision::{closest_direction, closest_point_to_center},
            CollisionRules, CollisionSystem, GameObject, ObjectType, PlaneAxis, PlaneDescriptor,
            Shape, XZDirection,
        },
        scene::{SceneDescription, SceneSnapshot},
    };
}
