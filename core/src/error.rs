use thiserror::Error;

use crate::{
    position::Coordinate,
    types::{LineNo, RoverIndex},
};

/// Syntax errors raised while turning the raw script into a `ParsedProgram`.
///
/// The `Display` text is the message surfaced to the caller verbatim; the
/// fields carry where in the script the problem was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid Upper Right Coordinates")]
    InvalidGridBound { line: LineNo, text: String },

    #[error("Invalid Rover Initial Position")]
    InvalidRoverInitialPosition {
        line:  LineNo,
        rover: RoverIndex,
        text:  String,
    },

    #[error("Invalid Rover Movement Command")]
    InvalidRoverMovementCommand {
        line:  LineNo,
        rover: RoverIndex,
        text:  String,
    },

    #[error("Missing Rover Movement Command")]
    MissingMovementCommand { line: LineNo, rover: RoverIndex },
}

impl ParseError {
    /// The script line the error points at.
    pub fn line(&self) -> LineNo {
        match self {
            Self::InvalidGridBound { line, .. }
            | Self::InvalidRoverInitialPosition { line, .. }
            | Self::InvalidRoverMovementCommand { line, .. }
            | Self::MissingMovementCommand { line, .. } => *line,
        }
    }
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("The coordination is outside of grid")]
    OutOfBounds {
        rover:      RoverIndex,
        coordinate: Coordinate,
    },

    #[error("The coordination is already occupied")]
    Occupied {
        rover:      RoverIndex,
        coordinate: Coordinate,
        occupant:   RoverIndex,
    },

    #[error("Grid bound must be positive in both dimensions, got ({x}, {y})")]
    DegenerateGrid { x: i64, y: i64 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
