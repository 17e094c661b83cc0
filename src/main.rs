//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <bfs|dfs>  Traversal order (default: bfs)
//!   --max-depth <n>       Maximum moves from the start state (default: 1024)
//!   --unbounded           Remove the depth bound
//!   --words <file>        Extra dictionary words for a word ladder
//!
//! Set RUST_LOG=debug for a search summary on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;

use puzzle_solver::{
    solve, AnyPuzzle, PuzzleDefinition, SolverConfig, SolverResult, Strategy, DEFAULT_MAX_DEPTH,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solver for state-space puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a path from a puzzle's start state to a solved state
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value_t = StrategyArg::Bfs)]
        strategy: StrategyArg,

        /// Maximum moves explored from the start state
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Search without a depth bound
        #[arg(long, conflicts_with = "max_depth")]
        unbounded: bool,

        /// Whitespace-separated dictionary words added to a word ladder
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Breadth-first: fewest moves
    Bfs,
    /// Depth-first: first path found
    Dfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Dfs => Strategy::DepthFirst,
        }
    }
}

/// Output format for a search result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    search_exhausted: bool,
    strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitions: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<String>,
    states_visited: usize,
    states_expanded: usize,
    time_elapsed_ms: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether a solution was found.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            max_depth,
            unbounded,
            words,
        } => {
            let json_content = read_input(file, stdin)?;
            let mut definition: PuzzleDefinition =
                serde_json::from_str(&json_content).context("Failed to parse puzzle JSON")?;

            if let Some(path) = words {
                add_dictionary(&mut definition, &path)?;
            }

            info!("solving {} puzzle", definition.kind());
            let puzzle = definition.build().context("Invalid puzzle definition")?;

            let config = if unbounded {
                SolverConfig::unbounded()
            } else {
                SolverConfig::with_max_depth(max_depth)
            };
            let strategy = Strategy::from(strategy);

            let result = solve(puzzle, strategy, &config);
            let output = format_result(strategy, &result);
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(result.is_solved())
        }
    }
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path).with_context(|| format!("Failed to read file {:?}", path))
    } else {
        bail!("Must provide either a file path or --stdin")
    }
}

fn add_dictionary(definition: &mut PuzzleDefinition, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {:?}", path))?;

    match definition {
        PuzzleDefinition::WordLadder { words, .. } => {
            let before = words.len();
            words.extend(text.split_whitespace().map(str::to_string));
            info!("loaded {} words from {:?}", words.len() - before, path);
        }
        other => warn!("ignoring word list for {} puzzle", other.kind()),
    }
    Ok(())
}

fn format_result(strategy: Strategy, result: &SolverResult<AnyPuzzle>) -> SolveOutput {
    SolveOutput {
        solved: result.is_solved(),
        search_exhausted: result.search_exhausted,
        strategy,
        transitions: result.solution.as_ref().map(|path| path.transitions()),
        path: result
            .solution
            .as_ref()
            .map(|path| path.states().map(|state| state.to_string()).collect())
            .unwrap_or_default(),
        states_visited: result.states_visited,
        states_expanded: result.states_expanded,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
