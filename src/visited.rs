//! Visited-state tracking shared by both solvers.

use std::collections::HashSet;

use crate::puzzle::Puzzle;

/// Signatures of every configuration a search has already claimed.
///
/// The set only grows. Each top-level solve builds a fresh one and threads
/// it through the whole search, so nothing leaks between runs.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    signatures: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `puzzle` as seen. Returns `false` if it was already present.
    pub fn insert<P: Puzzle>(&mut self, puzzle: &P) -> bool {
        self.signatures.insert(puzzle.signature())
    }

    pub fn contains<P: Puzzle>(&self, puzzle: &P) -> bool {
        self.signatures.contains(&puzzle.signature())
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
