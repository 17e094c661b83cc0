//! Generic state-space search for puzzles.
//!
//! A puzzle exposes its successor states and a solved predicate through the
//! [`Puzzle`] trait. Two solvers search from a start state for a solved one
//! and return the path between them: a recursive depth-first search that
//! returns the first path it finds, and a level-order breadth-first search
//! that returns a shortest one.

pub mod bfs;
pub mod dfs;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod puzzles;
pub mod solver;
pub mod visited;

#[cfg(test)]
mod testing;

// Re-export main types
pub use bfs::{breadth_first_solve, solve_breadth_first};
pub use dfs::{depth_first_solve, solve_depth_first};
pub use error::PuzzleError;
pub use node::{Node, NodeId, SearchTree, SolutionPath};
pub use puzzle::Puzzle;
pub use puzzles::{AnyPuzzle, Cell, PegSolitaire, PuzzleDefinition, SlidingTile, WordLadder};
pub use solver::{solve, SolverConfig, SolverResult, Strategy, DEFAULT_MAX_DEPTH};
pub use visited::VisitedSet;
