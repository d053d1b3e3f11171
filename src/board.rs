#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are tiny, so usize <-> i32 casts never truncate
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use crate::components::{Cell, Color};
use crate::error::EngineError;
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, BUFFER_ROWS};

/// Settled blocks of the playfield.
///
/// Columns run `0..width`, rows run `-buffer..height`. Rows above zero are the
/// hidden spawn buffer; anything settling there ends the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub buffer: usize,
    // Indexed [x][y + buffer]
    cells: Vec<Vec<Option<Color>>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize, buffer: usize) -> Self {
        Self {
            width,
            height,
            buffer,
            cells: vec![vec![None; height + buffer]; width],
        }
    }

    pub fn clear(&mut self) {
        for column in &mut self.cells {
            column.fill(None);
        }
    }

    /// Index of the first visible row, counting the buffer as negative rows.
    #[must_use]
    pub fn top_row(&self) -> i32 {
        -(self.buffer as i32)
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && (cell.x as usize) < self.width
            && cell.y >= self.top_row()
            && cell.y < self.height as i32
    }

    fn slot(&self, cell: Cell) -> Option<(usize, usize)> {
        if self.contains(cell) {
            Some((cell.x as usize, (cell.y + self.buffer as i32) as usize))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Color> {
        self.slot(cell).and_then(|(x, y)| self.cells[x][y])
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Settles `cells` with `color`.
    ///
    /// Nothing is written unless every cell is inside the playfield and empty.
    pub fn add(&mut self, cells: &[Cell], color: Color) -> Result<(), EngineError> {
        for &cell in cells {
            if !self.contains(cell) {
                return Err(EngineError::OutOfBounds(cell));
            }
            if self.is_occupied(cell) {
                return Err(EngineError::CellOccupied(cell));
            }
        }

        for &cell in cells {
            if let Some((x, y)) = self.slot(cell) {
                self.cells[x][y] = Some(color);
            }
        }

        Ok(())
    }

    /// Rows where every column is occupied, in ascending order.
    #[must_use]
    pub fn full_rows(&self) -> Vec<i32> {
        (self.top_row()..self.height as i32)
            .filter(|&y| (0..self.width as i32).all(|x| self.is_occupied(Cell::new(x, y))))
            .collect()
    }

    /// Deletes the given rows and lets everything above them fall.
    ///
    /// Each remaining block drops by the number of removed rows beneath it, so a
    /// contiguous clear shifts everything above it by exactly the rows removed.
    pub fn remove_rows(&mut self, rows: &[i32]) {
        let mut removed: Vec<i32> = rows
            .iter()
            .copied()
            .filter(|&y| y >= self.top_row() && y < self.height as i32)
            .collect();
        if removed.is_empty() {
            return;
        }
        removed.sort_unstable();
        removed.dedup();

        let buffer = self.buffer as i32;
        for column in &mut self.cells {
            let mut write = column.len();
            for read in (0..column.len()).rev() {
                if removed.binary_search(&(read as i32 - buffer)).is_ok() {
                    continue;
                }
                write -= 1;
                column[write] = column[read];
            }
            column[..write].fill(None);
        }
    }

    /// True when any settled block sits in the hidden buffer rows.
    #[must_use]
    pub fn has_cells_above_top(&self) -> bool {
        self.cells
            .iter()
            .any(|column| column[..self.buffer].iter().any(Option::is_some))
    }

    /// Every settled block with its color, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        let buffer = self.buffer as i32;
        self.cells.iter().enumerate().flat_map(move |(x, column)| {
            column.iter().enumerate().filter_map(move |(y, slot)| {
                slot.map(|color| (Cell::new(x as i32, y as i32 - buffer), color))
            })
        })
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|column| column.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, BUFFER_ROWS)
    }
}
