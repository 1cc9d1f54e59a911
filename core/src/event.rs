//! Engine events — one per state change during a run.
//!
//! RULE: Every grid mutation the engine performs has a matching event.
//! Variants are appended only; never removed or reordered.

use crate::{
    position::{Coordinate, Direction, Movement, RoverPosition},
    types::{RoverIndex, Step},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Run events ─────────────────────────────────
    RunStarted {
        grid_x: i64,
        grid_y: i64,
        rovers: usize,
    },
    RunCompleted {
        rovers: usize,
        occupied_cells: usize,
    },

    // ── Rover events ───────────────────────────────
    RoverPlaced {
        rover:    RoverIndex,
        position: RoverPosition,
    },
    RoverRotated {
        rover:    RoverIndex,
        turn:     Movement,
        from:     Direction,
        to:       Direction,
    },
    RoverMoved {
        rover:    RoverIndex,
        from:     Coordinate,
        to:       Coordinate,
    },
    RoverSettled {
        rover:           RoverIndex,
        position:        RoverPosition,
        /// Origin cell handed back to the grid, if the rover left it.
        released_origin: Option<Coordinate>,
    },
}

impl SimEvent {
    /// Stable name used for the `event_type` column of the log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RunStarted { .. }   => "run_started",
            Self::RunCompleted { .. } => "run_completed",
            Self::RoverPlaced { .. }  => "rover_placed",
            Self::RoverRotated { .. } => "rover_rotated",
            Self::RoverMoved { .. }   => "rover_moved",
            Self::RoverSettled { .. } => "rover_settled",
        }
    }

    /// The rover the event concerns; `None` for run-level events.
    pub fn rover(&self) -> Option<RoverIndex> {
        match self {
            Self::RunStarted { .. } | Self::RunCompleted { .. } => None,
            Self::RoverPlaced { rover, .. }
            | Self::RoverRotated { rover, .. }
            | Self::RoverMoved { rover, .. }
            | Self::RoverSettled { rover, .. } => Some(*rover),
        }
    }
}

/// A recorded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub step:       Step,
    pub rover:      Option<RoverIndex>,
    pub event_type: String,
    pub payload:    String, // JSON-serialized SimEvent
}
