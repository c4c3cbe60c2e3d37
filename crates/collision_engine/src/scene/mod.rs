//! Scene snapshots
//!
//! The game loop owns its objects; once per frame it hands the collision
//! code a [`SceneSnapshot`] of every collider, keyed by name.

pub mod snapshot;

pub use snapshot::{SceneDescription, SceneSnapshot};
