//! Compass classification of horizontal directions
//!
//! The world is y-up: +x is east, -z is north.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec4;

/// Dominant horizontal direction of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum XZDirection {
    /// -x
    West,
    /// +x
    East,
    /// -z
    North,
    /// +z
    South,
    /// Degenerate, vertical, tied, or not a direction
    #[default]
    None,
}

impl XZDirection {
    /// The four compass directions in classification order
    pub const COMPASS: [Self; 4] = [Self::West, Self::East, Self::North, Self::South];

    /// Unit direction vector (`w = 0`); zero for [`XZDirection::None`]
    pub fn unit(self) -> Vec4 {
        match self {
            Self::West => Vec4::new(-1.0, 0.0, 0.0, 0.0),
            Self::East => Vec4::new(1.0, 0.0, 0.0, 0.0),
            Self::North => Vec4::new(0.0, 0.0, -1.0, 0.0),
            Self::South => Vec4::new(0.0, 0.0, 1.0, 0.0),
            Self::None => Vec4::zeros(),
        }
    }

    /// Whether this direction lies on the x axis
    pub fn is_east_west(self) -> bool {
        matches!(self, Self::West | Self::East)
    }

    /// Whether this direction lies on the z axis
    pub fn is_north_south(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// Classify a direction vector by its closest compass direction
///
/// Returns [`XZDirection::None`] for a zero vector, for anything with
/// `w != 0` (points are not directions), when no compass direction has a
/// positive alignment, and when the best alignment is shared by two
/// directions.
pub fn closest_direction(dir_vec: Vec4) -> XZDirection {
    let norm = dir_vec.norm();
    if norm == 0.0 || dir_vec.w != 0.0 {
        return XZDirection::None;
    }
    let normalized = dir_vec / norm;

    let mut best = XZDirection::None;
    let mut best_dot = 0.0_f32;
    let mut tied = false;
    for candidate in XZDirection::COMPASS {
        let dot = normalized.dot(&candidate.unit());
        if dot > best_dot {
            best = candidate;
            best_dot = dot;
            tied = false;
        } else if dot == best_dot && dot > 0.0 {
            tied = true;
        }
    }

    if tied { XZDirection::None } else { best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::direction;

    #[test]
    fn test_axis_directions() {
        assert_eq!(closest_direction(direction(1.0, 0.0, 0.0)), XZDirection::East);
        assert_eq!(closest_direction(direction(-2.0, 0.0, 0.0)), XZDirection::West);
        assert_eq!(closest_direction(direction(0.0, 0.0, -1.0)), XZDirection::North);
        assert_eq!(closest_direction(direction(0.0, 0.0, 0.1)), XZDirection::South);
    }

    #[test]
    fn test_dominant_component_wins() {
        assert_eq!(closest_direction(direction(3.0, 5.0, -0.5)), XZDirection::East);
        assert_eq!(closest_direction(direction(-0.2, -1.0, 0.9)), XZDirection::South);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(closest_direction(Vec4::zeros()), XZDirection::None);
        assert_eq!(closest_direction(Vec4::new(0.0, 1.0, 0.0, 1.0)), XZDirection::None);
        assert_eq!(closest_direction(Vec4::new(1.0, 0.0, 0.0, 1.0)), XZDirection::None);
        // Straight up has no horizontal alignment
        assert_eq!(closest_direction(direction(0.0, 1.0, 0.0)), XZDirection::None);
    }

    #[test]
    fn test_diagonal_tie_is_none() {
        assert_eq!(closest_direction(direction(1.0, 0.0, -1.0)), XZDirection::None);
        assert_eq!(closest_direction(direction(-2.0, 0.0, 2.0)), XZDirection::None);
    }

    #[test]
    fn test_unit_round_trip() {
        for dir in XZDirection::COMPASS {
            assert_eq!(closest_direction(dir.unit()), dir);
        }
        assert!(XZDirection::East.is_east_west());
        assert!(XZDirection::North.is_north_south());
        assert!(!XZDirection::None.is_east_west());
    }
}
