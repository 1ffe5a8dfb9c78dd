//! Rendering a [`SolveReport`] as the plain text trace or as JSON.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::solver::SolveReport;
use crate::state::State;

/// Line printed before each solution path
pub const SUCCESS_MARKER: &str = "success!";

/// Output format for a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// JSON shape of a solve report
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOutput {
    pub solved: bool,
    pub initial: State,
    pub solutions: Vec<Vec<State>>,
    pub states_explored: usize,
    pub states_pruned: usize,
    pub depth_cutoffs: usize,
    pub max_depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl SolveOutput {
    pub fn from_report(report: &SolveReport, elapsed_us: Option<u64>) -> Self {
        Self {
            solved: report.solved(),
            initial: report.initial,
            solutions: report.solutions.clone(),
            states_explored: report.states_explored,
            states_pruned: report.states_pruned,
            depth_cutoffs: report.depth_cutoffs,
            max_depth: report.max_depth,
            elapsed_us,
        }
    }
}

/// Every solution as a success marker line followed by one line per state.
///
/// Empty when nothing was found.
pub fn render_text(report: &SolveReport) -> String {
    let mut out = String::new();
    for path in &report.solutions {
        out.push_str(SUCCESS_MARKER);
        out.push('\n');
        for state in path {
            out.push_str(&state.to_string());
            out.push('\n');
        }
    }
    out
}

/// One-line summary of the search counters
pub fn render_stats(report: &SolveReport) -> String {
    format!(
        "explored {}, pruned {}, solutions {}",
        report.states_explored,
        report.states_pruned,
        report.solutions.len()
    )
}

pub fn render_json(report: &SolveReport, elapsed_us: Option<u64>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SolveOutput::from_report(report, elapsed_us))
}
