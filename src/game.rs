#![warn(clippy::all, clippy::pedantic)]

// Playfield dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;
// Hidden rows above the visible top, used for spawning and game-over detection
pub const BUFFER_ROWS: usize = 2;

// Column of the template's left edge when a piece spawns
pub const SPAWN_COLUMN: i32 = 3;

// Number of upcoming pieces shown to the player
pub const PREVIEW_LEN: usize = 3;

// Line clear scoring
pub const POINTS_PER_LINE: u32 = 100;
pub const POINTS_PER_TETRIS: u32 = 800;

// Fall speed curve: interval shrinks with score down to a floor
pub const BASE_FALL_INTERVAL_MS: u64 = 1000;
pub const MIN_FALL_INTERVAL_MS: u64 = 150;
pub const FALL_SPEEDUP_PER_POINT: f64 = 825.0 / 4000.0;
