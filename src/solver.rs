//! Solver configuration, search reports and strategy dispatch.

use serde::{Deserialize, Serialize};

use crate::bfs::solve_breadth_first;
use crate::dfs::solve_depth_first;
use crate::node::SolutionPath;
use crate::puzzle::Puzzle;

/// Default bound on search depth, in moves from the start state.
///
/// Depth-first search recurses once per move, so this also bounds its
/// call-stack usage.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Traversal order used to explore the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// First solution found, no length guarantee.
    DepthFirst,
    /// Solution with the fewest moves.
    BreadthFirst,
}

/// Configuration for the solvers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// States this many moves from the start are never expanded.
    /// `None` removes the bound.
    pub max_depth: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl SolverConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// No depth bound. Depth-first recursion is then limited only by the
    /// size of the reachable state space.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Whether a state `depth` moves from the start may be expanded.
    pub(crate) fn allows_expansion(&self, depth: usize) -> bool {
        depth < self.max_depth.unwrap_or(usize::MAX)
    }
}

/// Outcome of one search run
#[derive(Debug, Clone)]
pub struct SolverResult<P> {
    /// Path from the start state to a solved state, if one was found
    pub solution: Option<SolutionPath<P>>,
    /// No solution exists: the reachable space was covered without the
    /// depth bound cutting anything off
    pub search_exhausted: bool,
    /// Distinct states recorded in the visited set
    pub states_visited: usize,
    /// States whose extensions were generated
    pub states_expanded: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<P> SolverResult<P> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Short human-readable summary of how the search ended.
    pub fn outcome(&self) -> String {
        match &self.solution {
            Some(path) => format!("solved in {} moves", path.transitions()),
            None if self.search_exhausted => "exhausted".to_string(),
            None => "stopped at depth bound".to_string(),
        }
    }
}

/// Search from `puzzle` with the chosen strategy.
pub fn solve<P: Puzzle>(puzzle: P, strategy: Strategy, config: &SolverConfig) -> SolverResult<P> {
    match strategy {
        Strategy::DepthFirst => solve_depth_first(puzzle, config),
        Strategy::BreadthFirst => solve_breadth_first(puzzle, config),
    }
}
