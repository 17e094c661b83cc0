//! A tiny graph-backed puzzle for exercising the solvers.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::puzzle::Puzzle;

/// Walk a directed graph from `at` towards `goal`.
///
/// Edges keep their insertion order, which fixes the extension order.
/// Every call to `extensions` bumps a counter shared by all states of the
/// same puzzle.
#[derive(Debug, Clone)]
pub struct GraphPuzzle {
    at: u32,
    goal: u32,
    edges: Rc<BTreeMap<u32, Vec<u32>>>,
    expansions: Rc<Cell<usize>>,
}

impl GraphPuzzle {
    pub fn new(start: u32, goal: u32, edges: &[(u32, u32)]) -> Self {
        let mut adjacency: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for &(from, to) in edges {
            adjacency.entry(from).or_default().push(to);
        }
        Self {
            at: start,
            goal,
            edges: Rc::new(adjacency),
            expansions: Rc::new(Cell::new(0)),
        }
    }

    pub fn at(&self) -> u32 {
        self.at
    }

    /// How many times any state of this puzzle was expanded.
    pub fn expansions(&self) -> usize {
        self.expansions.get()
    }
}

impl PartialEq for GraphPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.goal == other.goal
    }
}

impl fmt::Display for GraphPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.at)
    }
}

impl Puzzle for GraphPuzzle {
    fn extensions(&self) -> Vec<Self> {
        self.expansions.set(self.expansions.get() + 1);
        self.edges
            .get(&self.at)
            .map(|next| {
                next.iter()
                    .map(|&at| Self {
                        at,
                        ..self.clone()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_solved(&self) -> bool {
        self.at == self.goal
    }

    fn signature(&self) -> String {
        self.at.to_string()
    }
}
