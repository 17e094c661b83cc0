//! Concrete puzzle variants and their JSON definitions.
//!
//! The solvers are generic over [`Puzzle`]; these are the variants the CLI
//! knows how to load.

pub mod peg_solitaire;
pub mod sliding_tile;
pub mod word_ladder;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::puzzle::Puzzle;

pub use peg_solitaire::{Cell, PegSolitaire};
pub use sliding_tile::SlidingTile;
pub use word_ladder::WordLadder;

/// A puzzle as read from JSON, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleDefinition {
    WordLadder {
        from: String,
        to: String,
        #[serde(default)]
        words: Vec<String>,
    },
    SlidingTile {
        from: Vec<Vec<String>>,
        to: Vec<Vec<String>>,
    },
    PegSolitaire {
        grid: Vec<String>,
    },
}

impl PuzzleDefinition {
    /// Validate the definition and construct the puzzle it describes.
    pub fn build(self) -> Result<AnyPuzzle> {
        Ok(match self {
            PuzzleDefinition::WordLadder { from, to, words } => {
                AnyPuzzle::WordLadder(WordLadder::new(from, to, words)?)
            }
            PuzzleDefinition::SlidingTile { from, to } => {
                AnyPuzzle::SlidingTile(SlidingTile::new(from, to)?)
            }
            PuzzleDefinition::PegSolitaire { grid } => {
                AnyPuzzle::PegSolitaire(PegSolitaire::from_rows(&grid)?)
            }
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PuzzleDefinition::WordLadder { .. } => "word_ladder",
            PuzzleDefinition::SlidingTile { .. } => "sliding_tile",
            PuzzleDefinition::PegSolitaire { .. } => "peg_solitaire",
        }
    }
}

/// Any of the built-in variants.
///
/// Successors always stay in the variant they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyPuzzle {
    WordLadder(WordLadder),
    SlidingTile(SlidingTile),
    PegSolitaire(PegSolitaire),
}

impl fmt::Display for AnyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPuzzle::WordLadder(puzzle) => fmt::Display::fmt(puzzle, f),
            AnyPuzzle::SlidingTile(puzzle) => fmt::Display::fmt(puzzle, f),
            AnyPuzzle::PegSolitaire(puzzle) => fmt::Display::fmt(puzzle, f),
        }
    }
}

impl Puzzle for AnyPuzzle {
    fn extensions(&self) -> Vec<Self> {
        match self {
            AnyPuzzle::WordLadder(puzzle) => wrap(puzzle.extensions(), AnyPuzzle::WordLadder),
            AnyPuzzle::SlidingTile(puzzle) => wrap(puzzle.extensions(), AnyPuzzle::SlidingTile),
            AnyPuzzle::PegSolitaire(puzzle) => wrap(puzzle.extensions(), AnyPuzzle::PegSolitaire),
        }
    }

    fn is_solved(&self) -> bool {
        match self {
            AnyPuzzle::WordLadder(puzzle) => puzzle.is_solved(),
            AnyPuzzle::SlidingTile(puzzle) => puzzle.is_solved(),
            AnyPuzzle::PegSolitaire(puzzle) => puzzle.is_solved(),
        }
    }

    fn signature(&self) -> String {
        match self {
            AnyPuzzle::WordLadder(puzzle) => puzzle.signature(),
            AnyPuzzle::SlidingTile(puzzle) => puzzle.signature(),
            AnyPuzzle::PegSolitaire(puzzle) => puzzle.signature(),
        }
    }
}

fn wrap<P>(states: Vec<P>, variant: fn(P) -> AnyPuzzle) -> Vec<AnyPuzzle> {
    states.into_iter().map(variant).collect()
}
