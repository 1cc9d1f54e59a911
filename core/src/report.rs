//! Final result of a successful run.

use crate::{command::GridBound, position::RoverPosition};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub grid_bound: GridBound,
    /// Terminal poses, in input order.
    pub rovers:     Vec<RoverPosition>,
}

/// One `"x y D"` line per rover.
impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rover) in self.rovers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{rover}")?;
        }
        Ok(())
    }
}
