//! Shared primitive types used across the entire simulation.

/// Position of a rover in the input script. Rover 0 is the first one listed.
pub type RoverIndex = usize;

/// A run-wide event counter. Every recorded state change gets the next step.
pub type Step = u64;

/// A 0-based line number within the raw command script.
pub type LineNo = usize;
