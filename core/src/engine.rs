//! The simulation engine — places and drives rovers over the occupancy grid.
//!
//! EXECUTION ORDER (fixed, per rover, in input order):
//!   1. Place   claim the origin cell
//!   2. Move    replay the movement string; every `M` claims its target cell
//!   3. Settle  release the origin if the rover left it; record final pose
//!
//! RULES:
//!   - Rover i is fully settled before rover i+1 is placed.
//!   - Every cell a rover lands on goes through `validate_and_claim`.
//!   - Only the origin is released at settle time. Cells crossed en route
//!     stay claimed by that rover for the rest of the run.
//!   - The first error aborts the run. Grid state from earlier rovers is
//!     not rolled back and no partial report is returned.

use crate::{
    command::{GridBound, MovementCommand, ParsedProgram},
    config::SimConfig,
    error::{SimError, SimResult},
    event::{EventLogEntry, SimEvent},
    grid::OccupancyGrid,
    position::{Coordinate, Movement, RoverPosition},
    report::MissionReport,
    types::{RoverIndex, Step},
};

pub struct SimEngine {
    pub config: SimConfig,
    grid_bound: GridBound,
    initial:    Vec<RoverPosition>,
    movements:  Vec<MovementCommand>,
    /// Current pose of every rover. Entry i is replaced when rover i settles.
    positions:  Vec<RoverPosition>,
    grid:       OccupancyGrid,
    step:       Step,
    event_log:  Vec<EventLogEntry>,
}

impl SimEngine {
    pub fn new(program: ParsedProgram, config: SimConfig) -> SimResult<Self> {
        let grid = OccupancyGrid::new(program.grid_bound)?;
        Ok(Self {
            config,
            grid_bound: program.grid_bound,
            positions: program.rovers.clone(),
            initial: program.rovers,
            movements: program.movements,
            grid,
            step: 0,
            event_log: Vec::new(),
        })
    }

    /// Run every rover to completion and return their final poses.
    ///
    /// Each call starts from an empty grid and the parsed initial poses,
    /// so an engine can be executed more than once with the same outcome.
    pub fn execute(&mut self) -> SimResult<MissionReport> {
        self.reset()?;

        let rover_count = self.initial.len();
        log::info!(
            "run started: grid={}x{} rovers={rover_count}",
            self.grid_bound.x,
            self.grid_bound.y
        );
        self.record(SimEvent::RunStarted {
            grid_x: self.grid_bound.x,
            grid_y: self.grid_bound.y,
            rovers: rover_count,
        })?;

        for rover in 0..rover_count {
            let settled = self.run_rover(rover)?;
            self.positions[rover] = settled;
        }

        self.record(SimEvent::RunCompleted {
            rovers:         rover_count,
            occupied_cells: self.grid.occupied_count(),
        })?;
        log::info!(
            "run completed: rovers={rover_count} occupied_cells={}",
            self.grid.occupied_count()
        );

        Ok(MissionReport {
            grid_bound: self.grid_bound,
            rovers:     self.positions.clone(),
        })
    }

    /// The grid as left by the last run, including a run that failed.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Current rover poses. Rovers that have not settled keep their
    /// initial pose.
    pub fn positions(&self) -> &[RoverPosition] {
        &self.positions
    }

    /// Empty unless `config.record_events` is set.
    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    fn reset(&mut self) -> SimResult<()> {
        self.grid = OccupancyGrid::new(self.grid_bound)?;
        self.positions = self.initial.clone();
        self.step = 0;
        self.event_log.clear();
        Ok(())
    }

    /// Place, move and settle a single rover. Returns its final pose.
    fn run_rover(&mut self, rover: RoverIndex) -> SimResult<RoverPosition> {
        let origin = self.initial[rover];

        // 1. Place
        self.claim(origin.coordination, rover)?;
        log::debug!("rover {rover} placed at {origin}");
        self.record(SimEvent::RoverPlaced {
            rover,
            position: origin,
        })?;

        // 2. Move
        let steps: Vec<Movement> = self.movements[rover].steps().collect();
        let mut pose = origin;
        for movement in steps {
            match movement {
                Movement::Left | Movement::Right => {
                    let from = pose.direction;
                    pose.direction = from.rotate(movement);
                    log::debug!("rover {rover} turned {from} -> {}", pose.direction);
                    self.record(SimEvent::RoverRotated {
                        rover,
                        turn: movement,
                        from,
                        to: pose.direction,
                    })?;
                }
                Movement::Move => {
                    let from = pose.coordination;
                    // A step past the i64 range is necessarily off the grid.
                    let Some(to) = from.advance(pose.direction) else {
                        log::warn!("rover {rover} stepped past the coordinate range at {from}");
                        return Err(SimError::OutOfBounds {
                            rover,
                            coordinate: from,
                        });
                    };
                    self.claim(to, rover)?;
                    pose.coordination = to;
                    log::debug!("rover {rover} moved {from} -> {to}");
                    self.record(SimEvent::RoverMoved { rover, from, to })?;
                }
            }
        }

        // 3. Settle
        let released_origin = if pose.coordination != origin.coordination {
            self.grid.release(origin.coordination);
            Some(origin.coordination)
        } else {
            None
        };
        log::debug!("rover {rover} settled at {pose}");
        self.record(SimEvent::RoverSettled {
            rover,
            position: pose,
            released_origin,
        })?;

        Ok(pose)
    }

    fn claim(&mut self, c: Coordinate, rover: RoverIndex) -> SimResult<()> {
        self.grid
            .validate_and_claim(c, rover)
            .inspect_err(|e| log::warn!("rover {rover} rejected at {c}: {e:?}"))
    }

    fn record(&mut self, event: SimEvent) -> SimResult<()> {
        self.step += 1;
        if !self.config.record_events {
            return Ok(());
        }
        let entry = EventLogEntry {
            step:       self.step,
            rover:      event.rover(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(&event)?,
        };
        self.event_log.push(entry);
        Ok(())
    }
}

/// Run a parsed program with the default configuration.
pub fn execute(program: &ParsedProgram) -> SimResult<Vec<RoverPosition>> {
    let mut engine = SimEngine::new(program.clone(), SimConfig::default())?;
    let report = engine.execute()?;
    Ok(report.rovers)
}

/// Parse and run a raw script in one call.
pub fn run_script(raw: &str, config: SimConfig) -> SimResult<MissionReport> {
    let program = ParsedProgram::parse(raw)?;
    SimEngine::new(program, config)?.execute()
}
