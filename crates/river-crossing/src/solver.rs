//! Memoized depth-first search over puzzle states.
//!
//! Every goal reached is recorded as a solution, in DFS preorder, and the
//! search keeps going afterwards unless `stop_at_first` is set. A state is
//! marked visited only once it has been entered and failed the goal test,
//! so a goal state is never in the visited set.
//!
//! Two drivers share the same per-frame steps: a recursive one ([`solve_with`])
//! and one with an explicit frame stack ([`solve_iterative`]). They visit
//! states in the same order and produce identical reports.

use std::collections::HashSet;

use smallvec::SmallVec;

use crate::rules::{is_goal, neighbors, Neighbors};
use crate::state::{State, StateKey, ROLE_COUNT};

/// Number of distinct states; no path can be longer
pub const STATE_SPACE: usize = 1 << ROLE_COUNT;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Stop entering new states once one solution has been recorded
    pub stop_at_first: bool,
    /// Frames deeper than this are not entered
    pub max_depth: usize,
    /// Write enter/prune/success/backtrack events to stderr
    pub trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stop_at_first: false,
            max_depth: 64,
            trace: false,
        }
    }
}

/// Outcome of one solve call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub initial: State,
    /// Root-to-goal paths, in the order they were found
    pub solutions: Vec<Vec<State>>,
    /// States in the order they were added to the visited set
    pub visit_order: Vec<State>,
    /// Frames that were entered (pushed onto the path)
    pub states_explored: usize,
    /// Frames skipped because the state was already visited
    pub states_pruned: usize,
    /// Frames skipped because of `max_depth`
    pub depth_cutoffs: usize,
    /// Longest path held during the search
    pub max_depth: usize,
}

impl SolveReport {
    fn new(initial: State) -> Self {
        Self {
            initial,
            solutions: Vec::new(),
            visit_order: Vec::new(),
            states_explored: 0,
            states_pruned: 0,
            depth_cutoffs: 0,
            max_depth: 0,
        }
    }

    pub fn solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// The first path found, or `None` if the search found nothing
    pub fn first_solution(&self) -> Option<&[State]> {
        self.solutions.first().map(Vec::as_slice)
    }
}

/// Visited set, current path and counters for a single solve call
struct SearchContext<'a> {
    config: &'a SolverConfig,
    visited: HashSet<StateKey>,
    path: SmallVec<[State; STATE_SPACE]>,
    report: SolveReport,
}

impl<'a> SearchContext<'a> {
    fn new(initial: State, config: &'a SolverConfig) -> Self {
        Self {
            config,
            visited: HashSet::with_capacity(STATE_SPACE),
            path: SmallVec::new(),
            report: SolveReport::new(initial),
        }
    }

    fn should_stop(&self) -> bool {
        self.config.stop_at_first && self.report.solved()
    }

    /// Run the entry steps for `state`.
    ///
    /// Returns the neighbors to explore when the frame stays open; the caller
    /// must then call [`SearchContext::leave`] once they are done. Returns
    /// `None` when the frame is already closed (pruned, cut off, or a goal).
    fn enter(&mut self, state: State) -> Option<Neighbors> {
        if self.visited.contains(&state.key()) {
            self.report.states_pruned += 1;
            self.trace(format_args!("prune {}", state.key()));
            return None;
        }
        if self.path.len() >= self.config.max_depth {
            self.report.depth_cutoffs += 1;
            self.trace(format_args!("cutoff {}", state.key()));
            return None;
        }

        self.path.push(state);
        self.report.states_explored += 1;
        self.report.max_depth = self.report.max_depth.max(self.path.len());
        self.trace(format_args!("enter {} depth {}", state.key(), self.path.len()));

        if is_goal(&state) {
            self.trace(format_args!("success depth {}", self.path.len()));
            self.report.solutions.push(self.path.to_vec());
            self.path.pop();
            return None;
        }

        self.visited.insert(state.key());
        self.report.visit_order.push(state);
        Some(neighbors(&state))
    }

    fn leave(&mut self, state: State) {
        self.trace(format_args!("backtrack {}", state.key()));
        self.path.pop();
    }

    fn visit(&mut self, state: State) {
        let next_states = match self.enter(state) {
            Some(next_states) => next_states,
            None => return,
        };
        for next in next_states {
            if self.should_stop() {
                break;
            }
            self.visit(next);
        }
        self.leave(state);
    }

    fn trace(&self, event: std::fmt::Arguments<'_>) {
        if self.config.trace {
            eprintln!("{:indent$}{}", "", event, indent = self.path.len() * 2);
        }
    }
}

/// Solve from `initial` with the default configuration.
pub fn solve(initial: State) -> SolveReport {
    solve_with(initial, &SolverConfig::default())
}

/// Recursive depth-first solve.
pub fn solve_with(initial: State, config: &SolverConfig) -> SolveReport {
    let mut ctx = SearchContext::new(initial, config);
    ctx.visit(initial);
    ctx.report
}

/// An open frame: a state whose neighbors are being explored
#[derive(Debug, Clone)]
struct SearchFrame {
    state: State,
    neighbors: Neighbors,
    next: usize,
}

/// Depth-first solve with an explicit frame stack instead of recursion.
pub fn solve_iterative(initial: State, config: &SolverConfig) -> SolveReport {
    let mut ctx = SearchContext::new(initial, config);
    let mut frames: Vec<SearchFrame> = Vec::with_capacity(STATE_SPACE);

    if let Some(neighbors) = ctx.enter(initial) {
        frames.push(SearchFrame {
            state: initial,
            neighbors,
            next: 0,
        });
    }

    while let Some(frame) = frames.last_mut() {
        if frame.next >= frame.neighbors.len() || ctx.should_stop() {
            let state = frame.state;
            frames.pop();
            ctx.leave(state);
            continue;
        }

        let candidate = frame.neighbors[frame.next];
        frame.next += 1;

        if let Some(neighbors) = ctx.enter(candidate) {
            frames.push(SearchFrame {
                state: candidate,
                neighbors,
                next: 0,
            });
        }
    }

    ctx.report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_dead;

    fn path_keys(path: &[State]) -> Vec<String> {
        path.iter().map(|s| s.key().to_string()).collect()
    }

    #[test]
    fn test_canonical_solution() {
        let report = solve(State::INITIAL);

        assert!(report.solved());
        assert_eq!(report.solutions.len(), 1);
        let first = report.first_solution().unwrap();
        assert_eq!(
            path_keys(first),
            ["0000", "1010", "0010", "1110", "0100", "1101", "0101", "1111"]
        );
        assert_eq!(first.len() - 1, 7);
        assert_eq!(first.last(), Some(&State::GOAL));
        assert!(first.iter().all(|s| !is_dead(s)));
    }

    #[test]
    fn test_counters() {
        let report = solve(State::INITIAL);
        assert_eq!(report.states_explored, 10);
        assert_eq!(report.states_pruned, 10);
        assert_eq!(report.depth_cutoffs, 0);
        assert_eq!(report.max_depth, 8);
        assert_eq!(report.visit_order.len(), 9);
    }

    #[test]
    fn test_goal_never_marked_visited() {
        let report = solve(State::INITIAL);
        assert!(!report.visit_order.contains(&State::GOAL));

        let from_goal = solve(State::GOAL);
        assert_eq!(from_goal.solutions, vec![vec![State::GOAL]]);
        assert!(from_goal.visit_order.is_empty());
        assert_eq!(from_goal.states_explored, 1);
    }

    #[test]
    fn test_visited_has_no_duplicates() {
        let report = solve(State::INITIAL);
        let keys: HashSet<StateKey> = report.visit_order.iter().map(State::key).collect();
        assert_eq!(keys.len(), report.visit_order.len());
        // every non-goal entered frame is marked exactly once
        assert_eq!(
            report.states_explored,
            report.visit_order.len() + report.solutions.len()
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(solve(State::INITIAL), solve(State::INITIAL));
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for bits in 0u8..16 {
            let initial =
                State::from_bits(&[(bits >> 3) & 1, (bits >> 2) & 1, (bits >> 1) & 1, bits & 1])
                    .unwrap();
            for stop_at_first in [false, true] {
                let config = SolverConfig {
                    stop_at_first,
                    ..SolverConfig::default()
                };
                assert_eq!(
                    solve_with(initial, &config),
                    solve_iterative(initial, &config),
                    "start {}",
                    initial.key()
                );
            }
        }
    }

    #[test]
    fn test_stop_at_first() {
        let config = SolverConfig {
            stop_at_first: true,
            ..SolverConfig::default()
        };
        let report = solve_with(State::INITIAL, &config);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.first_solution(), solve(State::INITIAL).first_solution());
        assert!(report.states_explored <= solve(State::INITIAL).states_explored);
    }

    #[test]
    fn test_stop_at_first_with_two_reachable_goals() {
        let start: State = "0011".parse().unwrap();
        assert_eq!(solve(start).solutions.len(), 2);

        let config = SolverConfig {
            stop_at_first: true,
            ..SolverConfig::default()
        };
        for report in [solve_with(start, &config), solve_iterative(start, &config)] {
            assert_eq!(report.solutions.len(), 1);
            assert_eq!(
                path_keys(report.first_solution().unwrap()),
                ["0011", "1011", "0001", "1101", "0101", "1111"]
            );
        }

        let start: State = "0110".parse().unwrap();
        assert_eq!(solve(start).solutions.len(), 2);
        assert_eq!(solve_with(start, &config).solutions.len(), 1);
    }

    #[test]
    fn test_goal_reached_again_after_first_success() {
        // the goal is never marked visited, so a second parent reaches it too
        let report = solve("0011".parse().unwrap());

        assert_eq!(report.solutions.len(), 2);
        assert_eq!(
            path_keys(&report.solutions[0]),
            ["0011", "1011", "0001", "1101", "0101", "1111"]
        );
        assert_eq!(path_keys(&report.solutions[1]), ["0011", "1111"]);
        assert_eq!(report.states_explored, 12);
        assert_eq!(report.states_pruned, 10);
        assert!(!report.visit_order.contains(&State::GOAL));
    }

    #[test]
    fn test_depth_limit_reports_nothing() {
        let config = SolverConfig {
            max_depth: 3,
            ..SolverConfig::default()
        };
        let report = solve_with(State::INITIAL, &config);
        assert!(!report.solved());
        assert_eq!(report.first_solution(), None);
        assert!(report.depth_cutoffs > 0);
        assert!(report.max_depth <= 3);
    }
}
