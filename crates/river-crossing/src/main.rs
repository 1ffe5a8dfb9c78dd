//! CLI entry point for the river-crossing solver.
//!
//! Usage:
//!   river-crossing solve [options]
//!
//! Options:
//!   --start <bits>        Starting state as four 0/1 digits (default: 0000)
//!   --first-only          Stop after the first solution
//!   --format <fmt>        text or json (default: text)
//!   --stats               Print search counters after the text trace
//!   --trace               Log search events to stderr
//!   --max-depth <n>       Deepest path the search may hold (default: 64)
//!
//! Exit code is 0 when a solution was found, 1 when none was, 2 on bad input.

use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};

use river_crossing::{
    render_json, render_stats, render_text, solve_with, OutputFormat, SolverConfig, State,
};

#[derive(Parser)]
#[command(name = "river-crossing")]
#[command(about = "Depth-first solver for the escort/wolf/sheep/cabbage river-crossing puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for crossing sequences and print every one found
    Solve {
        /// Starting state, one digit per role (man, wolf, sheep, cabbage)
        #[arg(long, default_value = "0000")]
        start: String,

        /// Stop after the first solution
        #[arg(long)]
        first_only: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print search counters after the solutions (text format)
        #[arg(long)]
        stats: bool,

        /// Log search events to stderr
        #[arg(long)]
        trace: bool,

        /// Deepest path the search may hold
        #[arg(long, default_value = "64")]
        max_depth: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            start,
            first_only,
            format,
            stats,
            trace,
            max_depth,
        } => {
            let initial: State = match start.parse() {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("Error: invalid --start {:?}: {}", start, e);
                    process::exit(2);
                }
            };

            let config = SolverConfig {
                stop_at_first: first_only,
                max_depth,
                trace,
            };

            let started = Instant::now();
            let report = solve_with(initial, &config);
            let elapsed_us = started.elapsed().as_micros() as u64;

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&report));
                    if stats {
                        println!("{}", render_stats(&report));
                    }
                }
                OutputFormat::Json => match render_json(&report, Some(elapsed_us)) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing report: {}", e);
                        process::exit(2);
                    }
                },
            }

            if report.solved() {
                process::exit(0);
            } else {
                process::exit(1);
            }
        }
    }
}
