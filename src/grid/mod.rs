//! The maze: a `rows x cols` array of cell codes, loaded once and
//! logically immutable during planning (save for the one exception
//! described in [`Grid::demote_objective`]).

pub mod error;
#[doc(hidden)]
mod test;

use crate::config::Configuration;
use crate::motion::Orientation;
pub use error::GridError;
use serde::{Deserialize, Serialize};

/// A single grid cell's code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Free,
    Start,
    Objective,
}

impl Cell {
    fn from_digit(digit: u32) -> Cell {
        match digit {
            0 => Cell::Wall,
            2 => Cell::Start,
            3 => Cell::Objective,
            // "1 = free, other = free" per the maze format.
            _ => Cell::Free,
        }
    }
}

/// A reachable-or-not objective cell, in the order it was discovered
/// scanning the grid row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub x: i32,
    pub y: i32,
    pub reachable: bool,
}

/// The loaded maze. Owns the cell array and the discovered objectives for
/// the lifetime of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    objectives: Vec<Objective>,
}

impl Grid {
    /// Parses a UTF-8 maze file: one row per non-empty line, single-digit
    /// cell codes, stray spaces ignored. All non-empty lines must share
    /// the same column count.
    pub fn load(bytes: &[u8]) -> Result<Grid, GridError> {
        let text = String::from_utf8_lossy(bytes);

        let rows: Vec<Vec<u32>> = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .filter_map(|c| c.to_digit(10))
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let cols = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::InconsistentRowLength {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        let rows_count = rows.len();
        let mut cells = Vec::with_capacity(rows_count * cols);
        let mut objectives = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, &digit) in row.iter().enumerate() {
                let cell = Cell::from_digit(digit);
                if cell == Cell::Objective {
                    objectives.push(Objective { x: x as i32, y: y as i32, reachable: false });
                }
                cells.push(cell);
            }
        }

        if !cells.iter().any(|c| *c == Cell::Start) {
            return Err(GridError::MissingStart);
        }

        log::debug!("loaded {rows_count}x{cols} grid with {} objectives", objectives.len());

        Ok(Grid { rows: rows_count, cols, cells, objectives })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn objectives_mut(&mut self) -> &mut [Objective] {
        &mut self.objectives
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            None
        } else {
            Some(y as usize * self.cols + x as usize)
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// In-bounds and not a wall. Out-of-bounds is never "free".
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), None | Some(Cell::Wall))
    }

    /// Demotes the objective at `(x, y)` from `Objective` to `Free`, so it
    /// neither blocks nor attracts the tour planner. Called once per
    /// unreachable objective after reachability analysis.
    pub fn demote_objective(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell::Free;
        }
    }

    /// Derives the start configuration by scanning for `2` markers.
    ///
    /// Scans rows top-to-bottom, columns left-to-right; each `2` cell
    /// encountered overwrites the tentative configuration, so the last `2`
    /// in scan order — in practice the rightmost `2` of the single
    /// contiguous start run — is the one whose left-neighbor run length
    /// decides the final orientation: three consecutive `2`s (including
    /// itself) means orientation 3 with the anchor shifted two columns
    /// left, two means orientation 2, otherwise orientation 0.
    pub fn start_configuration(&self) -> Result<Configuration, GridError> {
        let mut found: Option<Configuration> = None;

        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                if self.get(x, y) != Some(Cell::Start) {
                    continue;
                }

                let left1 = self.get(x - 1, y) == Some(Cell::Start);
                let left2 = x >= 2 && self.get(x - 2, y) == Some(Cell::Start);

                found = Some(if left1 && left2 {
                    Configuration::new(x - 2, y, Orientation::O3)
                } else if left1 {
                    Configuration::new(x, y, Orientation::O2)
                } else {
                    Configuration::new(x, y, Orientation::O0)
                });
            }
        }

        found.ok_or(GridError::MissingStart)
    }
}
