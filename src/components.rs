#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Templates are at most 4x4, so template indices always fit in i32
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

const I_TEMPLATE: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const J_TEMPLATE: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const L_TEMPLATE: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];
const O_TEMPLATE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const S_TEMPLATE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const Z_TEMPLATE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const T_TEMPLATE: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::J,
        TetrominoType::L,
        TetrominoType::O,
        TetrominoType::S,
        TetrominoType::Z,
        TetrominoType::T,
    ];

    /// Maps `0..7` onto the seven shapes; larger values wrap.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Binary occupancy template, rows top to bottom.
    #[must_use]
    pub fn template(self) -> &'static [&'static [u8]] {
        match self {
            TetrominoType::I => I_TEMPLATE,
            TetrominoType::J => J_TEMPLATE,
            TetrominoType::L => L_TEMPLATE,
            TetrominoType::O => O_TEMPLATE,
            TetrominoType::S => S_TEMPLATE,
            TetrominoType::Z => Z_TEMPLATE,
            TetrominoType::T => T_TEMPLATE,
        }
    }

    /// Occupied `(column, row)` offsets inside the template.
    #[must_use]
    pub fn get_blocks(self) -> [(i32, i32); 4] {
        let mut blocks = [(0, 0); 4];
        let mut filled = 0;
        for (row, line) in self.template().iter().enumerate() {
            for (col, &bit) in line.iter().enumerate() {
                if bit == 1 {
                    blocks[filled] = (col as i32, row as i32);
                    filled += 1;
                }
            }
        }
        debug_assert_eq!(filled, 4, "every template holds exactly four blocks");
        blocks
    }

    /// Rotation pivot inside the template. `O` has none since it never rotates.
    #[must_use]
    pub fn pivot(self) -> Option<(i32, i32)> {
        match self {
            TetrominoType::O => None,
            // Sits between the middle blocks so the bar turns inside its 4x4 box
            TetrominoType::I => Some((2, 1)),
            _ => Some((1, 1)),
        }
    }

    #[must_use]
    pub fn get_color(self) -> Color {
        match self {
            TetrominoType::I => Color::rgb(0, 255, 255),
            TetrominoType::J => Color::rgb(0, 0, 255),
            TetrominoType::L => Color::rgb(255, 127, 0),
            TetrominoType::O => Color::rgb(255, 255, 0),
            TetrominoType::S => Color::rgb(0, 255, 0),
            TetrominoType::Z => Color::rgb(255, 0, 0),
            TetrominoType::T => Color::rgb(128, 0, 128),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TetrominoType::I => "I",
            TetrominoType::J => "J",
            TetrominoType::L => "L",
            TetrominoType::O => "O",
            TetrominoType::S => "S",
            TetrominoType::Z => "Z",
            TetrominoType::T => "T",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Half-intensity variant used for the landing shadow.
    #[must_use]
    pub const fn dimmed(self) -> Self {
        Self {
            r: self.r / 2,
            g: self.g / 2,
            b: self.b / 2,
        }
    }
}

/// A grid coordinate. Rows grow downward; negative rows are the hidden buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Discrete player commands accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Quit,
}

// Commands collected from the terminal between simulation steps
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pending: Vec<InputEvent>,
}

impl Input {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
