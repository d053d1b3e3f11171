#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

use log::info;

use crate::board::Board;
use crate::game::{POINTS_PER_LINE, POINTS_PER_TETRIS};

/// Outcome of one line-clear pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineClear {
    pub rows_cleared: u32,
    pub score_delta: u32,
}

/// Points for clearing `rows` lines at once. Four lines is a tetris.
#[must_use]
pub fn score_for(rows: u32) -> u32 {
    if rows == 4 {
        POINTS_PER_TETRIS
    } else {
        POINTS_PER_LINE * rows
    }
}

/// Removes every full row from `board` and scores the result.
pub fn clear(board: &mut Board) -> LineClear {
    let rows = board.full_rows();
    if rows.is_empty() {
        return LineClear::default();
    }

    board.remove_rows(&rows);

    let rows_cleared = rows.len() as u32;
    let score_delta = score_for(rows_cleared);
    info!("Cleared {rows_cleared} rows {rows:?} for {score_delta} points");

    LineClear {
        rows_cleared,
        score_delta,
    }
}
