//! Gameplay rules layered on top of the raw shape tests
//!
//! Most games need to filter collisions and give some colliders special
//! treatment. Here that is done by name: the scene's naming convention is
//! the contract between level data and collision response, so every name
//! the response code reacts to lives in [`CollisionRules`] and can be
//! overridden from a config file.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::physics::collision::ObjectType;

/// A cube/sphere test that is forced to miss
///
/// The pair is ordered and typed: it only applies when an object of
/// `query_type` named `query` is tested against the other shape named
/// `other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPair {
    /// Shape of the object being queried (cube or sphere)
    pub query_type: ObjectType,
    /// Name of the object being queried
    pub query: String,
    /// Name of the object it must not report
    pub other: String,
}

impl ExclusionPair {
    /// Creates an exclusion pair
    pub fn new(query_type: ObjectType, query: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            query_type,
            query: query.into(),
            other: other.into(),
        }
    }

    /// A cube `query` that must not report the sphere `other`
    pub fn cube_query(query: impl Into<String>, other: impl Into<String>) -> Self {
        Self::new(ObjectType::Cube, query, other)
    }

    /// A sphere `query` that must not report the cube `other`
    pub fn sphere_query(query: impl Into<String>, other: impl Into<String>) -> Self {
        Self::new(ObjectType::Sphere, query, other)
    }
}

/// Name-driven collision rules
///
/// The defaults describe the stock level: a first-person `hand` sphere that
/// must never hit its own `player` body, four boundary planes, and obstacle
/// boxes whose names contain `cube` or `wall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionRules {
    /// Cube/sphere pairs that never collide
    pub exclusions: Vec<ExclusionPair>,
    /// Planes that stop movement along x
    pub east_west_planes: Vec<String>,
    /// Planes that stop movement along z
    pub north_south_planes: Vec<String>,
    /// Case-sensitive substrings marking a box obstacle
    pub obstacle_markers: Vec<String>,
    /// Scale applied to an isolated movement component before classifying it
    pub axis_amplification: f32,
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self {
            exclusions: vec![
                ExclusionPair::cube_query("player", "hand"),
                ExclusionPair::sphere_query("hand", "player"),
            ],
            east_west_planes: vec!["planeEast".to_string(), "planeWest".to_string()],
            north_south_planes: vec!["planeNorth".to_string(), "planeSouth".to_string()],
            obstacle_markers: vec!["cube".to_string(), "wall".to_string()],
            axis_amplification: 100.0,
        }
    }
}

impl CollisionRules {
    /// Whether the test of `query` (of shape `query_type`) against `other`
    /// is suppressed
    pub fn is_excluded(&self, query_type: ObjectType, query: &str, other: &str) -> bool {
        self.exclusions.iter().any(|pair| {
            pair.query_type == query_type && pair.query == query && pair.other == other
        })
    }

    /// Whether `name` is a plane that blocks x movement
    pub fn is_east_west_plane(&self, name: &str) -> bool {
        self.east_west_planes.iter().any(|plane| plane == name)
    }

    /// Whether `name` is a plane that blocks z movement
    pub fn is_north_south_plane(&self, name: &str) -> bool {
        self.north_south_planes.iter().any(|plane| plane == name)
    }

    /// Whether `name` marks a box obstacle (substring match)
    pub fn is_obstacle(&self, name: &str) -> bool {
        self.obstacle_markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
    }

    /// Adds an exclusion pair
    #[must_use]
    pub fn with_exclusion(mut self, pair: ExclusionPair) -> Self {
        self.exclusions.push(pair);
        self
    }
}

impl Config for CollisionRules {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.axis_amplification.is_finite() || self.axis_amplification <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "axis_amplification must be positive and finite, got {}",
                self.axis_amplification
            )));
        }
        Ok(())
    }
}
