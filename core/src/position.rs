//! Rover pose primitives — coordinates, compass headings, movement steps.
//!
//! RULE: Poses are plain values. The engine copies a pose, steps the copy,
//! and writes the result back; nothing holds a reference into the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid.
///
/// Parsed coordinates are never negative. The fields are signed so that a
/// step off the west or south edge yields a value the grid rejects as out
/// of bounds instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit along `direction`, or `None` when
    /// the step would leave the `i64` range.
    pub fn advance(self, direction: Direction) -> Option<Self> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_add(1)),
            Direction::East  => (self.x.checked_add(1), Some(self.y)),
            Direction::South => (Some(self.x), self.y.checked_sub(1)),
            Direction::West  => (self.x.checked_sub(1), Some(self.y)),
        };
        Some(Self::new(x?, y?))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading of a rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parse a heading letter. Accepts either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East  => 'E',
            Self::South => 'S',
            Self::West  => 'W',
        }
    }

    /// N → W → S → E → N
    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West  => Self::South,
            Self::South => Self::East,
            Self::East  => Self::North,
        }
    }

    /// N → E → S → W → N
    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East  => Self::South,
            Self::South => Self::West,
            Self::West  => Self::North,
        }
    }

    /// Apply a rotation step. `Movement::Move` leaves the heading unchanged.
    pub fn rotate(self, movement: Movement) -> Self {
        match movement {
            Movement::Left  => self.rotate_left(),
            Movement::Right => self.rotate_right(),
            Movement::Move  => self,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single instruction from a movement string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// `L` — rotate 90° counter-clockwise in place.
    Left,
    /// `R` — rotate 90° clockwise in place.
    Right,
    /// `M` — advance one cell in the current heading.
    Move,
}

impl Movement {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'M' => Some(Self::Move),
            _ => None,
        }
    }
}

/// A rover's pose at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPosition {
    pub coordination: Coordinate,
    pub direction:    Direction,
}

impl RoverPosition {
    pub fn new(x: i64, y: i64, direction: Direction) -> Self {
        Self {
            coordination: Coordinate::new(x, y),
            direction,
        }
    }
}

/// Formats as the script's own `"x y D"` notation.
impl fmt::Display for RoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.coordination.x, self.coordination.y, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_return_to_start() {
        for d in Direction::ALL {
            let left = (0..4).fold(d, |acc, _| acc.rotate_left());
            let right = (0..4).fold(d, |acc, _| acc.rotate_right());
            assert_eq!(left, d, "L×4 from {d} ended at {left}");
            assert_eq!(right, d, "R×4 from {d} ended at {right}");
        }
    }

    #[test]
    fn left_and_right_are_inverses() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_left().rotate_right(), d);
            assert_eq!(d.rotate_right().rotate_left(), d);
        }
    }

    #[test]
    fn left_cycle_matches_compass() {
        assert_eq!(Direction::North.rotate_left(), Direction::West);
        assert_eq!(Direction::West.rotate_left(), Direction::South);
        assert_eq!(Direction::South.rotate_left(), Direction::East);
        assert_eq!(Direction::East.rotate_left(), Direction::North);
    }

    #[test]
    fn move_does_not_rotate() {
        for d in Direction::ALL {
            assert_eq!(d.rotate(Movement::Move), d);
        }
    }

    #[test]
    fn advance_steps_along_heading() {
        let c = Coordinate::new(2, 2);
        assert_eq!(c.advance(Direction::North), Some(Coordinate::new(2, 3)));
        assert_eq!(c.advance(Direction::East), Some(Coordinate::new(3, 2)));
        assert_eq!(c.advance(Direction::South), Some(Coordinate::new(2, 1)));
        assert_eq!(c.advance(Direction::West), Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn advance_off_origin_goes_negative() {
        let c = Coordinate::new(0, 0).advance(Direction::West);
        assert_eq!(c, Some(Coordinate::new(-1, 0)));
    }

    #[test]
    fn advance_past_i64_range_is_none() {
        let edge = Coordinate::new(i64::MAX, i64::MAX);
        assert_eq!(edge.advance(Direction::East), None);
        assert_eq!(edge.advance(Direction::North), None);

        let floor = Coordinate::new(i64::MIN, i64::MIN);
        assert_eq!(floor.advance(Direction::West), None);
        assert_eq!(floor.advance(Direction::South), None);
    }

    #[test]
    fn heading_letters_are_case_insensitive() {
        assert_eq!(Direction::from_char('n'), Some(Direction::North));
        assert_eq!(Direction::from_char('W'), Some(Direction::West));
        assert_eq!(Direction::from_char('x'), None);
        assert_eq!(Movement::from_char('m'), Some(Movement::Move));
        assert_eq!(Movement::from_char('Q'), None);
    }

    #[test]
    fn pose_displays_as_script_notation() {
        let pose = RoverPosition::new(1, 3, Direction::North);
        assert_eq!(pose.to_string(), "1 3 N");
    }

    #[test]
    fn direction_serializes_as_letter() {
        let json = serde_json::to_string(&Direction::East).unwrap();
        assert_eq!(json, "\"E\"");
    }
}
