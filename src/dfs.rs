//! Recursive depth-first search.
//!
//! Extensions are tried in the order the puzzle lists them and the first
//! solution found wins; later siblings are never explored. The visited set
//! is shared by the whole call tree and never rolled back, so a state
//! claimed on one branch is off limits to every other branch, even one that
//! would reach it in fewer moves. Paths are therefore not guaranteed to be
//! shortest.

use std::time::Instant;

use log::{debug, trace};

use crate::node::SolutionPath;
use crate::puzzle::Puzzle;
use crate::solver::{SolverConfig, SolverResult};
use crate::visited::VisitedSet;

/// Depth-first search with the default configuration.
///
/// Returns `None` when no solved state is reachable.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionPath<P>> {
    solve_depth_first(puzzle, &SolverConfig::default()).solution
}

/// Depth-first search from `puzzle`, bounded by `config.max_depth`.
pub fn solve_depth_first<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolverResult<P> {
    let start_time = Instant::now();
    let mut search = DepthFirst {
        config,
        visited: VisitedSet::new(),
        states_expanded: 0,
        cut_off: false,
    };

    let solution = search.explore(puzzle, 0).and_then(|trail| {
        // trail runs from the solved state back to the start
        let mut states = trail.into_iter().rev();
        states
            .next()
            .map(|root| SolutionPath::from_chain(root, states))
    });

    let result = SolverResult {
        search_exhausted: solution.is_none() && !search.cut_off,
        solution,
        states_visited: search.visited.len(),
        states_expanded: search.states_expanded,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    };
    debug!(
        "depth-first search {}: {} states visited, {} expanded, {} ms",
        result.outcome(),
        result.states_visited,
        result.states_expanded,
        result.time_elapsed_ms
    );
    result
}

struct DepthFirst<'a> {
    config: &'a SolverConfig,
    visited: VisitedSet,
    states_expanded: usize,
    cut_off: bool,
}

impl DepthFirst<'_> {
    /// Returns the states from a solved state back up to `puzzle`.
    fn explore<P: Puzzle>(&mut self, puzzle: P, depth: usize) -> Option<Vec<P>> {
        if !self.visited.insert(&puzzle) {
            return None;
        }

        if puzzle.is_solved() {
            return Some(vec![puzzle]);
        }

        if !self.config.allows_expansion(depth) {
            trace!("depth bound reached at {}", puzzle.signature());
            self.cut_off = true;
            return None;
        }

        self.states_expanded += 1;
        let extensions = puzzle.extensions();
        trace!(
            "expanding {} at depth {}: {} extensions",
            puzzle.signature(),
            depth,
            extensions.len()
        );

        for extension in extensions {
            if let Some(mut trail) = self.explore(extension, depth + 1) {
                trail.push(puzzle);
                return Some(trail);
            }
        }

        None
    }
}
