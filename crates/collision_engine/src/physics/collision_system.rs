//! Collision queries and movement response
//!
//! This module implements a pure collision system: it never owns or mutates
//! game objects. Each frame the game loop passes in a [`SceneSnapshot`], asks
//! which objects the mover overlaps, and clamps its proposed movement
//! against each of them.

use std::path::Path;
use std::sync::OnceLock;

use crate::config::Config;
use crate::error::CollisionResult;
use crate::foundation::math::Vec4;
use crate::physics::collision::{
    closest_direction, closest_point_to_center, cube_cube, cube_plane, cube_sphere, GameObject,
    ObjectType,
};
use crate::physics::collision_rules::CollisionRules;
use crate::scene::SceneSnapshot;

/// Collision detection and response for one set of [`CollisionRules`]
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem {
    rules: CollisionRules,
}

impl CollisionSystem {
    /// Create a collision system with the given rules
    pub fn new(rules: CollisionRules) -> Self {
        Self { rules }
    }

    /// Create a collision system with rules loaded from a `.toml` or `.ron` file
    pub fn from_rules_file(path: impl AsRef<Path>) -> CollisionResult<Self> {
        Ok(Self::new(CollisionRules::load_from_file(path)?))
    }

    /// Process-wide instance with the default rules
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<CollisionSystem> = OnceLock::new();
        SHARED.get_or_init(Self::default)
    }

    /// Active rules
    pub fn rules(&self) -> &CollisionRules {
        &self.rules
    }

    /// Test one ordered pair
    ///
    /// Only cube/cube, cube/plane and cube/sphere pairs (in either order for
    /// the sphere) have a test; every other combination never collides.
    pub fn intersects(&self, query: &GameObject, other: &GameObject) -> bool {
        match (query.object_type(), other.object_type()) {
            (ObjectType::Cube, ObjectType::Cube) => cube_cube(query, other),
            (ObjectType::Cube, ObjectType::Plane) => cube_plane(query, other),
            (ObjectType::Cube, ObjectType::Sphere) => {
                !self.rules.is_excluded(ObjectType::Cube, &query.name, &other.name)
                    && cube_sphere(query, other)
            }
            (ObjectType::Sphere, ObjectType::Cube) => {
                !self.rules.is_excluded(ObjectType::Sphere, &query.name, &other.name)
                    && cube_sphere(other, query)
            }
            _ => false,
        }
    }

    /// Names of every object in `scene` that `query` overlaps
    ///
    /// The query object itself (matched by name) is skipped. Names come back
    /// in the snapshot's iteration order.
    pub fn collided(&self, query: &GameObject, scene: &SceneSnapshot) -> Vec<String> {
        let hits: Vec<String> = scene
            .iter()
            .filter(|other| other.name != query.name)
            .filter(|other| self.intersects(query, other))
            .map(|other| other.name.clone())
            .collect();

        if !hits.is_empty() {
            log::debug!("'{}' collides with {:?}", query.name, hits);
        }
        hits
    }

    /// Clamp `move_delta` against one object `moving` collided with
    ///
    /// - Boundary planes zero the movement along the axis they bound.
    /// - Obstacle boxes zero the movement component that points at the
    ///   face `moving` is touching; moving along or away from it is kept.
    /// - Anything else, and `moving` itself, leaves `move_delta` alone.
    pub fn update_movement_direction(
        &self,
        moving: &GameObject,
        collided_name: &str,
        move_delta: Vec4,
        scene: &SceneSnapshot,
    ) -> Vec4 {
        if collided_name == moving.name {
            return move_delta;
        }

        let mut corrected = move_delta;
        if self.rules.is_east_west_plane(collided_name) {
            corrected.x = 0.0;
            log::trace!("'{}' stopped along x by '{}'", moving.name, collided_name);
            return corrected;
        }
        if self.rules.is_north_south_plane(collided_name) {
            corrected.z = 0.0;
            log::trace!("'{}' stopped along z by '{}'", moving.name, collided_name);
            return corrected;
        }
        if !self.rules.is_obstacle(collided_name) {
            return move_delta;
        }

        let obstacle = scene.get_or_sentinel(collided_name);
        let contact_point = closest_point_to_center(&obstacle, moving);
        let contact_direction = closest_direction(contact_point - moving.position_center);

        let axis = if contact_direction.is_east_west() {
            0
        } else if contact_direction.is_north_south() {
            2
        } else {
            return move_delta;
        };

        // Small deltas lose precision when normalized, so amplify first.
        let mut along_axis = Vec4::zeros();
        along_axis[axis] = move_delta[axis] * self.rules.axis_amplification;
        if along_axis.norm() == 0.0 {
            return move_delta;
        }

        if closest_direction(along_axis) == contact_direction {
            corrected[axis] = 0.0;
            log::trace!(
                "'{}' blocked moving {:?} into '{}'",
                moving.name,
                contact_direction,
                collided_name
            );
        }
        corrected
    }

    /// Scan `scene` for `moving` and fold every hit into `move_delta`
    ///
    /// Corrections are applied in scan order.
    pub fn resolve_movement(
        &self,
        moving: &GameObject,
        move_delta: Vec4,
        scene: &SceneSnapshot,
    ) -> Vec4 {
        self.collided(moving, scene).iter().fold(move_delta, |delta, name| {
            self.update_movement_direction(moving, name, delta, scene)
        })
    }
}
