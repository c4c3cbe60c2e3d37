//! Error types for building scenes and loading collision data
//!
//! Geometry queries never fail; only constructing objects and snapshots,
//! or loading them from disk, can.

use crate::config::ConfigError;
use crate::foundation::math::Vec3;

/// Errors raised while assembling collision data
#[derive(thiserror::Error, Debug)]
pub enum CollisionError {
    /// Two objects in one snapshot share a name
    #[error("Duplicate object name in scene: {0}")]
    DuplicateName(String),

    /// A plane bbox must have exactly one `+inf` component, on x or z
    #[error("Invalid plane bbox for '{name}': {bbox:?}")]
    InvalidPlane {
        /// Name of the offending object (empty when not yet known)
        name: String,
        /// The rejected half-extent vector
        bbox: Vec3,
    },

    /// Loading rules or a scene failed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used by constructors and loaders
pub type CollisionResult<T> = Result<T, CollisionError>;
