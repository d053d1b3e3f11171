#![warn(clippy::all, clippy::pedantic)]

use std::collections::VecDeque;

use log::trace;

use crate::components::TetrominoType;
use crate::piece::Piece;

/// Source of shape choices for the factory.
pub trait Randomizer: Send + Sync {
    fn next_type(&mut self) -> TetrominoType;
}

/// Uniform choice among the seven shapes.
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: fastrand::Rng,
}

impl UniformRandomizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for UniformRandomizer {
    fn next_type(&mut self) -> TetrominoType {
        TetrominoType::from_index(self.rng.usize(0..TetrominoType::ALL.len()))
    }
}

/// Replays a fixed list of shapes, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceRandomizer {
    sequence: Vec<TetrominoType>,
    index: usize,
}

impl SequenceRandomizer {
    /// An empty list falls back to `O` forever.
    #[must_use]
    pub fn new(sequence: Vec<TetrominoType>) -> Self {
        Self { sequence, index: 0 }
    }
}

impl Randomizer for SequenceRandomizer {
    fn next_type(&mut self) -> TetrominoType {
        if self.sequence.is_empty() {
            return TetrominoType::O;
        }
        let next = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        next
    }
}

pub struct PieceFactory {
    randomizer: Box<dyn Randomizer>,
}

impl PieceFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_randomizer(UniformRandomizer::new())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_randomizer(UniformRandomizer::with_seed(seed))
    }

    #[must_use]
    pub fn with_randomizer(randomizer: impl Randomizer + 'static) -> Self {
        Self {
            randomizer: Box::new(randomizer),
        }
    }

    /// A new piece in its spawn pose.
    pub fn next(&mut self) -> Piece {
        let tetromino_type = self.randomizer.next_type();
        trace!("Factory produced {}", tetromino_type.name());
        Piece::spawn(tetromino_type)
    }

    /// `len` freshly generated pieces, in the order they will be played.
    pub fn fill_queue(&mut self, len: usize) -> VecDeque<Piece> {
        (0..len).map(|_| self.next()).collect()
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PieceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieceFactory").finish_non_exhaustive()
    }
}
