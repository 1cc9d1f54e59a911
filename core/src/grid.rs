//! Occupancy grid — which rover holds which cell.
//!
//! RULE: A cell holds at most one rover index at any time.
//! `validate_and_claim` is the only gate the engine uses to put a rover
//! on a cell; `occupy` and `release` are raw writes with no checks.

use crate::{
    command::GridBound,
    error::{SimError, SimResult},
    position::Coordinate,
    types::RoverIndex,
};
use std::collections::HashMap;

/// Cells are stored sparsely, keyed by coordinate. An absent key is an
/// empty cell, so a large grid costs nothing until rovers land on it.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    bound: GridBound,
    cells: HashMap<Coordinate, RoverIndex>,
}

impl OccupancyGrid {
    /// An empty grid spanning `[0, bound.x] × [0, bound.y]`.
    pub fn new(bound: GridBound) -> SimResult<Self> {
        if bound.x <= 0 || bound.y <= 0 {
            return Err(SimError::DegenerateGrid {
                x: bound.x,
                y: bound.y,
            });
        }
        Ok(Self {
            bound,
            cells: HashMap::new(),
        })
    }

    pub fn bound(&self) -> GridBound {
        self.bound
    }

    pub fn is_in_bounds(&self, c: Coordinate) -> bool {
        (0..=self.bound.x).contains(&c.x) && (0..=self.bound.y).contains(&c.y)
    }

    /// The rover holding `c`, if any. Out-of-bounds cells are always empty.
    pub fn occupant_at(&self, c: Coordinate) -> Option<RoverIndex> {
        self.cells.get(&c).copied()
    }

    /// Unconditionally mark `c` as held by `rover`.
    /// Callers must have checked bounds and ownership first.
    pub fn occupy(&mut self, c: Coordinate, rover: RoverIndex) {
        self.cells.insert(c, rover);
    }

    pub fn release(&mut self, c: Coordinate) {
        self.cells.remove(&c);
    }

    /// Claim `c` for `rover` after checking bounds and ownership.
    ///
    /// Succeeds when the cell is empty or already held by `rover`, so a
    /// rover may cross its own trail and return to its origin.
    pub fn validate_and_claim(&mut self, c: Coordinate, rover: RoverIndex) -> SimResult<()> {
        if !self.is_in_bounds(c) {
            return Err(SimError::OutOfBounds {
                rover,
                coordinate: c,
            });
        }
        match self.occupant_at(c) {
            Some(occupant) if occupant != rover => Err(SimError::Occupied {
                rover,
                coordinate: c,
                occupant,
            }),
            _ => {
                self.occupy(c, rover);
                Ok(())
            }
        }
    }

    /// Number of claimed cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells held by `rover`, in no particular order.
    pub fn cells_held_by(&self, rover: RoverIndex) -> Vec<Coordinate> {
        self.cells
            .iter()
            .filter(|(_, owner)| **owner == rover)
            .map(|(c, _)| *c)
            .collect()
    }
}
