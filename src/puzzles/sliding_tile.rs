//! Sliding-tile puzzles on an M x N grid, like the 15-puzzle.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// Symbol marking an empty square.
pub const BLANK: &str = "*";

/// Tiles slide into blanks until the grid matches a target grid.
#[derive(Debug, Clone)]
pub struct SlidingTile {
    rows: usize,
    cols: usize,
    /// Row-major cells
    cells: Vec<String>,
    target: Rc<Vec<String>>,
}

impl SlidingTile {
    pub fn new(from: Vec<Vec<String>>, to: Vec<Vec<String>>) -> Result<Self> {
        let (rows, cols, cells) = flatten(from)?;
        let (target_rows, target_cols, target) = flatten(to)?;
        if (rows, cols) != (target_rows, target_cols) {
            return Err(PuzzleError::DimensionMismatch {
                rows,
                cols,
                target_rows,
                target_cols,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells,
            target: Rc::new(target),
        })
    }

    /// Parse grids written one row per line, cells separated by whitespace.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(split_grid(from), split_grid(to))
    }

    /// Cells adjacent to `index`: above, below, left, right.
    fn neighbours(&self, index: usize) -> SmallVec<[usize; 4]> {
        let (row, col) = (index / self.cols, index % self.cols);
        let mut around = SmallVec::new();
        if row > 0 {
            around.push(index - self.cols);
        }
        if row + 1 < self.rows {
            around.push(index + self.cols);
        }
        if col > 0 {
            around.push(index - 1);
        }
        if col + 1 < self.cols {
            around.push(index + 1);
        }
        around
    }

    fn with_swap(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
            target: Rc::clone(&self.target),
        }
    }
}

fn split_grid(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

fn flatten(grid: Vec<Vec<String>>) -> Result<(usize, usize, Vec<String>)> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Err(PuzzleError::EmptyGrid);
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for (row, line) in grid.into_iter().enumerate() {
        if line.len() != cols {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }
        for (col, symbol) in line.into_iter().enumerate() {
            if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                return Err(PuzzleError::InvalidSymbol { row, col, symbol });
            }
            cells.push(symbol);
        }
    }

    Ok((rows, cols, cells))
}

impl PartialEq for SlidingTile {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.cells == other.cells
            && self.target == other.target
    }
}

impl fmt::Display for SlidingTile {
    /// Current grid on the left, target on the right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.cells.chunks(self.cols);
        let target = self.target.chunks(self.cols);
        for (now, goal) in current.zip(target) {
            for cell in now {
                write!(f, "{} ", cell)?;
            }
            write!(f, "\t")?;
            for cell in goal {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Puzzle for SlidingTile {
    /// Each blank, row-major, swapped with each non-blank neighbour.
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        for (blank, cell) in self.cells.iter().enumerate() {
            if cell != BLANK {
                continue;
            }
            for neighbour in self.neighbours(blank) {
                if self.cells[neighbour] != BLANK {
                    next.push(self.with_swap(blank, neighbour));
                }
            }
        }
        next
    }

    fn is_solved(&self) -> bool {
        self.cells == *self.target
    }

    /// Cells joined by spaces, rows by newlines. Symbols never contain
    /// whitespace, so distinct grids never share a signature.
    fn signature(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
