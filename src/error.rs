use thiserror::Error;

use crate::components::Cell;

/// Invariant violations inside the simulation engine.
///
/// The session never issues calls that trigger these in normal play; seeing one
/// means board and piece state disagree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("cell ({}, {}) is already occupied", .0.x, .0.y)]
    CellOccupied(Cell),

    #[error("cell ({}, {}) lies outside the playfield", .0.x, .0.y)]
    OutOfBounds(Cell),
}
