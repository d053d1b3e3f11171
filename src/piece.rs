#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_wrap)]

use crate::board::Board;
use crate::components::{Cell, Color, Direction, TetrominoType};
use crate::game::{BUFFER_ROWS, SPAWN_COLUMN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Spawned,
    Falling,
    Locked,
}

/// A tetromino on the playfield.
///
/// Pieces are small plain values: the active piece, the hold slot and each
/// preview slot own independent copies, and copying one never aliases another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    tetromino_type: TetrominoType,
    // Rotation pivot in board coordinates, fixed by the template at creation and
    // only ever translated afterwards
    origin: Cell,
    cells: [Cell; 4],
    state: PieceState,
}

impl Piece {
    /// Places the template with its top-left corner on `anchor`.
    #[must_use]
    pub fn at(tetromino_type: TetrominoType, anchor: Cell) -> Self {
        let (pivot_x, pivot_y) = tetromino_type.pivot().unwrap_or((0, 0));
        Self {
            tetromino_type,
            origin: anchor.offset(pivot_x, pivot_y),
            cells: tetromino_type
                .get_blocks()
                .map(|(dx, dy)| anchor.offset(dx, dy)),
            state: PieceState::Spawned,
        }
    }

    /// Spawn pose: top-centre of the playfield, spanning the buffer rows.
    #[must_use]
    pub fn spawn(tetromino_type: TetrominoType) -> Self {
        Self::at(
            tetromino_type,
            Cell::new(SPAWN_COLUMN, -(BUFFER_ROWS as i32)),
        )
    }

    /// A fresh copy of this shape back in its spawn pose.
    #[must_use]
    pub fn respawned(&self) -> Self {
        Self::spawn(self.tetromino_type)
    }

    #[must_use]
    pub fn tetromino_type(&self) -> TetrominoType {
        self.tetromino_type
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.tetromino_type.get_color()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    #[must_use]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[must_use]
    pub fn state(&self) -> PieceState {
        self.state
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state == PieceState::Locked
    }

    fn fits(board: &Board, cell: Cell) -> bool {
        board.contains(cell) && !board.is_occupied(cell)
    }

    #[must_use]
    pub fn can_move(&self, direction: Direction, board: &Board) -> bool {
        let (dx, dy) = direction.delta();
        self.cells
            .iter()
            .all(|cell| Self::fits(board, cell.offset(dx, dy)))
    }

    fn translate(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.origin = self.origin.offset(dx, dy);
        for cell in &mut self.cells {
            *cell = cell.offset(dx, dy);
        }
    }

    /// Moves one step in `direction` if the way is clear.
    ///
    /// A blocked downward step locks the piece; blocked sideways steps change
    /// nothing. Returns whether the piece moved.
    pub fn shift(&mut self, direction: Direction, board: &Board) -> bool {
        debug_assert!(!self.is_locked(), "a locked piece cannot move");
        if self.is_locked() {
            return false;
        }

        if self.can_move(direction, board) {
            self.translate(direction);
            self.state = PieceState::Falling;
            true
        } else {
            if direction == Direction::Down {
                self.lock();
            }
            false
        }
    }

    /// Turns the piece 90° clockwise about its origin.
    ///
    /// The turn is all-or-nothing: if any rotated cell leaves the playfield or
    /// hits a settled block the piece stays as it was. `O` never rotates.
    pub fn rotate(&mut self, board: &Board) -> bool {
        debug_assert!(!self.is_locked(), "a locked piece cannot rotate");
        if self.is_locked() || self.tetromino_type.pivot().is_none() {
            return false;
        }

        let origin = self.origin;
        let rotated = self.cells.map(|cell| {
            let (dx, dy) = (cell.x - origin.x, cell.y - origin.y);
            Cell::new(origin.x - dy, origin.y + dx)
        });

        if rotated.iter().all(|&cell| Self::fits(board, cell)) {
            self.cells = rotated;
            self.state = PieceState::Falling;
            true
        } else {
            false
        }
    }

    pub fn lock(&mut self) {
        self.state = PieceState::Locked;
    }

    /// Falls until the piece locks. Returns the number of rows travelled.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while !self.is_locked() {
            if self.shift(Direction::Down, board) {
                rows += 1;
            }
        }
        rows
    }

    /// Where this piece would land, as an unlocked snapshot.
    #[must_use]
    pub fn ghost(&self, board: &Board) -> Piece {
        let mut ghost = *self;
        while ghost.can_move(Direction::Down, board) {
            ghost.translate(Direction::Down);
        }
        ghost
    }
}
