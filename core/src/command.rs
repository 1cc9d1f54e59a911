//! Command script parser.
//!
//! Script layout (newline separated):
//!   line 0         grid bound          `5 5`
//!   line 1, 3, ..  rover initial pose  `1 2 N`
//!   line 2, 4, ..  rover movements     `LMLMLMLMM`
//!
//! RULE: Parsing is purely syntactic. Nothing here knows about grid bounds
//! or occupancy; the engine validates every coordinate at run time.

use crate::{
    error::ParseError,
    position::{Direction, Movement, RoverPosition},
    types::{LineNo, RoverIndex},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static GRID_BOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9][0-9]*)\s([1-9][0-9]*)$").expect("grid bound pattern compiles")
});

static ROVER_POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s([0-9]+)\s([NESWnesw])$").expect("rover position pattern compiles")
});

static MOVEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[LRMlrm]+$").expect("movement pattern compiles"));

/// Inclusive upper-right corner of the grid. Both values are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBound {
    pub x: i64,
    pub y: i64,
}

/// A validated movement string.
///
/// Keeps the text exactly as written (case included); `steps()` yields the
/// decoded instructions in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementCommand(String);

impl MovementCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn steps(&self) -> impl Iterator<Item = Movement> + '_ {
        // Only L/R/M survive validation, so nothing is dropped here.
        self.0.chars().filter_map(Movement::from_char)
    }
}

/// The fully parsed script: a grid and one (pose, movements) pair per rover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProgram {
    pub grid_bound: GridBound,
    /// Initial poses in input order.
    pub rovers:     Vec<RoverPosition>,
    /// Movement strings, `movements[i]` belongs to `rovers[i]`.
    pub movements:  Vec<MovementCommand>,
}

impl ParsedProgram {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_commands(text)
    }

    pub fn rover_count(&self) -> usize {
        self.rovers.len()
    }
}

/// Parse a raw script into a [`ParsedProgram`].
pub fn construct(raw: &str) -> Result<ParsedProgram, ParseError> {
    parse_commands(raw)
}

/// Parse the whole script.
///
/// The grid bound is parsed first, then each rover's pose followed by its
/// movement string, in appearance order. The first failure wins.
pub fn parse_commands(text: &str) -> Result<ParsedProgram, ParseError> {
    let mut lines = text
        .trim()
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .enumerate();

    // `split` always yields at least one item, even for empty input.
    let (bound_line, bound_text) = lines.next().unwrap_or((0, ""));
    let grid_bound = parse_grid_bound(bound_text).map_err(|e| relocate(e, bound_line, 0))?;

    let mut rovers = Vec::new();
    let mut movements = Vec::new();

    while let Some((pos_line, pos_text)) = lines.next() {
        let rover = rovers.len();
        let position =
            parse_rover_position(pos_text).map_err(|e| relocate(e, pos_line, rover))?;

        let Some((mv_line, mv_text)) = lines.next() else {
            return Err(ParseError::MissingMovementCommand {
                line: pos_line + 1,
                rover,
            });
        };
        let movement =
            parse_movement_command(mv_text).map_err(|e| relocate(e, mv_line, rover))?;

        rovers.push(position);
        movements.push(movement);
    }

    log::debug!(
        "parsed script: grid={}x{} rovers={}",
        grid_bound.x,
        grid_bound.y,
        rovers.len()
    );

    Ok(ParsedProgram {
        grid_bound,
        rovers,
        movements,
    })
}

/// Parse `"X Y"` with both values strictly positive decimal integers.
pub fn parse_grid_bound(line: &str) -> Result<GridBound, ParseError> {
    let invalid = || ParseError::InvalidGridBound {
        line: 0,
        text: line.to_string(),
    };

    let caps = GRID_BOUND_RE.captures(line).ok_or_else(invalid)?;
    let x = caps[1].parse::<i64>().map_err(|_| invalid())?;
    let y = caps[2].parse::<i64>().map_err(|_| invalid())?;
    Ok(GridBound { x, y })
}

/// Parse `"X Y D"` with non-negative integers and a heading in `NESW`
/// (either case).
pub fn parse_rover_position(line: &str) -> Result<RoverPosition, ParseError> {
    let invalid = || ParseError::InvalidRoverInitialPosition {
        line:  0,
        rover: 0,
        text:  line.to_string(),
    };

    let caps = ROVER_POSITION_RE.captures(line).ok_or_else(invalid)?;
    let x = caps[1].parse::<i64>().map_err(|_| invalid())?;
    let y = caps[2].parse::<i64>().map_err(|_| invalid())?;
    let direction = caps[3]
        .chars()
        .next()
        .and_then(Direction::from_char)
        .ok_or_else(invalid)?;
    Ok(RoverPosition::new(x, y, direction))
}

/// Parse a non-empty string over `{L, R, M}` (either case). The text is
/// kept unchanged.
pub fn parse_movement_command(line: &str) -> Result<MovementCommand, ParseError> {
    if !MOVEMENT_RE.is_match(line) {
        return Err(ParseError::InvalidRoverMovementCommand {
            line:  0,
            rover: 0,
            text:  line.to_string(),
        });
    }
    Ok(MovementCommand(line.to_string()))
}

/// Attach the script location to an error from a single-line parser.
fn relocate(err: ParseError, at: LineNo, for_rover: RoverIndex) -> ParseError {
    match err {
        ParseError::InvalidGridBound { text, .. } => ParseError::InvalidGridBound { line: at, text },
        ParseError::InvalidRoverInitialPosition { text, .. } => {
            ParseError::InvalidRoverInitialPosition {
                line: at,
                rover: for_rover,
                text,
            }
        }
        ParseError::InvalidRoverMovementCommand { text, .. } => {
            ParseError::InvalidRoverMovementCommand {
                line: at,
                rover: for_rover,
                text,
            }
        }
        ParseError::MissingMovementCommand { .. } => ParseError::MissingMovementCommand {
            line:  at,
            rover: for_rover,
        },
    }
}
