//! rover-core: command parser and grid simulation for rover scripts.
//!
//! Data flows one way:
//!   raw text → `command` → `ParsedProgram` → `engine` (mutating `grid`) → `MissionReport`

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod grid;
pub mod position;
pub mod report;
pub mod types;

pub use command::{construct, GridBound, MovementCommand, ParsedProgram};
pub use config::SimConfig;
pub use engine::{execute, run_script, SimEngine};
pub use error::{ParseError, SimError, SimResult};
pub use grid::OccupancyGrid;
pub use position::{Coordinate, Direction, Movement, RoverPosition};
pub use report::MissionReport;
