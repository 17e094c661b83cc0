//! The contract every searchable puzzle satisfies.
//!
//! Solvers only ever talk to a puzzle through this trait. They never look at
//! a variant's fields, so any type that can list its successors and report
//! whether it is solved can be searched.

use std::fmt::Display;

/// One configuration of a puzzle.
///
/// A value is immutable once built: [`Puzzle::extensions`] constructs new
/// values and never touches `self`.
///
/// # Signatures
///
/// [`Puzzle::signature`] is the key solvers record in their visited set.
/// Two equal configurations must produce the same signature. Distinct
/// configurations should not collide; the engine cannot detect it when they
/// do and will treat the second one as already seen.
///
/// `Display` is diagnostic output only. Solvers never hash it, so changing
/// how a puzzle prints cannot change what a search finds.
pub trait Puzzle: PartialEq + Display + Sized {
    /// Every configuration exactly one legal move away, in a fixed order.
    ///
    /// An empty vector is a dead end, not an error.
    fn extensions(&self) -> Vec<Self>;

    /// Whether this configuration is a goal.
    fn is_solved(&self) -> bool;

    /// Canonical key identifying this configuration.
    fn signature(&self) -> String;
}
