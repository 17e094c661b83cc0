//! Peg solitaire on a rectangular grid.

use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// A square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `*`
    Peg,
    /// `.`
    Hole,
    /// `#`, outside the playing area
    Unused,
}

impl Cell {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '*' => Some(Cell::Peg),
            '.' => Some(Cell::Hole),
            '#' => Some(Cell::Unused),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Peg => '*',
            Cell::Hole => '.',
            Cell::Unused => '#',
        }
    }
}

/// Where a jumping peg starts, relative to the hole it lands in: from the
/// right, from the left, from above, from below.
const JUMPS: [(isize, isize); 4] = [(0, 2), (0, -2), (-2, 0), (2, 0)];

/// A board position. Each move jumps a peg over an adjacent peg into a hole
/// and removes the peg jumped over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegSolitaire {
    grid: Vec<Vec<Cell>>,
}

impl PegSolitaire {
    pub fn new(grid: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = grid.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        if let Some((row, line)) = grid.iter().enumerate().find(|(_, line)| line.len() != cols) {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }
        Ok(Self { grid })
    }

    /// Build a board from marker rows such as `"**.**"`. Whitespace inside a
    /// row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        for (row, text) in rows.iter().enumerate() {
            let mut line = Vec::new();
            for (col, marker) in text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
            {
                let cell = Cell::from_marker(marker)
                    .ok_or(PuzzleError::UnknownMarker { row, col, marker })?;
                line.push(cell);
            }
            grid.push(line);
        }
        Self::new(grid)
    }

    pub fn peg_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Peg)
            .count()
    }

    fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.grid
            .get(row as usize)
            .and_then(|line| line.get(col as usize))
            .copied()
    }

    fn jump(&self, from: (usize, usize), over: (usize, usize), to: (usize, usize)) -> Self {
        let mut grid = self.grid.clone();
        grid[from.0][from.1] = Cell::Hole;
        grid[over.0][over.1] = Cell::Hole;
        grid[to.0][to.1] = Cell::Peg;
        Self { grid }
    }
}

impl FromStr for PegSolitaire {
    type Err = PuzzleError;

    /// One row per non-blank line.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for PegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.grid {
            for cell in line {
                write!(f, "{} ", cell.marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Puzzle for PegSolitaire {
    /// Holes row-major, then jumps in `JUMPS` order.
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        for (row, line) in self.grid.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell != Cell::Hole {
                    continue;
                }
                let (r, c) = (row as isize, col as isize);
                for (dr, dc) in JUMPS {
                    let (from_r, from_c) = (r + dr, c + dc);
                    let (over_r, over_c) = (r + dr / 2, c + dc / 2);
                    if self.cell(from_r, from_c) == Some(Cell::Peg)
                        && self.cell(over_r, over_c) == Some(Cell::Peg)
                    {
                        next.push(self.jump(
                            (from_r as usize, from_c as usize),
                            (over_r as usize, over_c as usize),
                            (row, col),
                        ));
                    }
                }
            }
        }
        next
    }

    /// At most one peg left.
    fn is_solved(&self) -> bool {
        self.peg_count() <= 1
    }

    fn signature(&self) -> String {
        self.grid
            .iter()
            .map(|line| line.iter().map(|cell| cell.marker()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
