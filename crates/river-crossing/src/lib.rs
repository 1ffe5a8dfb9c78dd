//! Solver for the escort/wolf/sheep/cabbage river-crossing puzzle.
//!
//! The escort rows between two banks and may take one cargo item per
//! crossing. The wolf may not be left with the sheep, nor the sheep with
//! the cabbage, unless the escort is on the same bank. The solver runs a
//! memoized depth-first search from a starting state and reports each
//! path to the all-crossed state in the order it is discovered.

pub mod report;
pub mod rules;
pub mod solver;
pub mod state;

// Re-export main types
pub use report::{render_json, render_stats, render_text, OutputFormat, SolveOutput, SUCCESS_MARKER};
pub use rules::{can_ferry, is_dead, is_goal, move_across, neighbors, Neighbors};
pub use solver::{solve, solve_iterative, solve_with, SolveReport, SolverConfig};
pub use state::{Bank, InvalidStateError, Role, State, StateKey};
