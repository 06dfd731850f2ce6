//! Domain model: grid coordinates, facing directions, and the robot pose

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RobotError;

/// An integer grid cell, `(x, y)`
pub type Coord = (i64, i64);

/// Render a coordinate as the wire label `"(x,y)"`
///
/// Used for the `obstacle_hit` response field and the persisted
/// obstacle-hit column.
pub fn coord_label(coord: Coord) -> String {
    format!("({},{})", coord.0, coord.1)
}

/// Facing direction - a closed enumeration, no other values are ever valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Rotate 90° counter-clockwise: NORTH→WEST→SOUTH→EAST→NORTH
    pub fn rotate_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Rotate 90° clockwise: NORTH→EAST→SOUTH→WEST→NORTH
    pub fn rotate_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit-step delta for a forward move while facing this direction
    ///
    /// A backward move is the negation of this delta.
    pub fn forward_delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Canonical uppercase name, as persisted and serialized
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Direction::North),
            "SOUTH" => Ok(Direction::South),
            "EAST" => Ok(Direction::East),
            "WEST" => Ok(Direction::West),
            other => Err(RobotError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// The robot's full state: position plus facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub x: i64,
    pub y: i64,
    pub facing: Direction,
}

impl Pose {
    pub fn new(x: i64, y: i64, facing: Direction) -> Self {
        Self { x, y, facing }
    }

    /// The cell this pose occupies
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left_cycle() {
        assert_eq!(Direction::North.rotate_left(), Direction::West);
        assert_eq!(Direction::West.rotate_left(), Direction::South);
        assert_eq!(Direction::South.rotate_left(), Direction::East);
        assert_eq!(Direction::East.rotate_left(), Direction::North);
    }

    #[test]
    fn test_rotate_right_cycle() {
        assert_eq!(Direction::North.rotate_right(), Direction::East);
        assert_eq!(Direction::East.rotate_right(), Direction::South);
        assert_eq!(Direction::South.rotate_right(), Direction::West);
        assert_eq!(Direction::West.rotate_right(), Direction::North);
    }

    #[test]
    fn test_direction_round_trip() {
        for d in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
    }

    #[test]
    fn test_direction_parse_case_insensitive() {
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
    }

    #[test]
    fn test_direction_parse_rejects_unknown() {
        let err = "UP".parse::<Direction>().unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_DIRECTION");
    }

    #[test]
    fn test_direction_serializes_uppercase() {
        let json = serde_json::to_string(&Direction::West).unwrap();
        assert_eq!(json, "\"WEST\"");
    }

    #[test]
    fn test_coord_label() {
        assert_eq!(coord_label((1, 4)), "(1,4)");
        assert_eq!(coord_label((-2, 0)), "(-2,0)");
    }
}
