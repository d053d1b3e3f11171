#![warn(clippy::all, clippy::pedantic)]

pub mod components_tests;
pub mod config_tests;
pub mod factory_tests;
pub mod integration_tests;
pub mod line_clear_tests;

#[cfg(test)]
pub mod test_utils {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use crate::board::Board;
    use crate::components::{Cell, TetrominoType};
    use crate::config::loader::CONFIG_PATH_ENV;
    use crate::factory::{PieceFactory, SequenceRandomizer};
    use crate::session::{FallCurve, Session};

    // Tests that touch the config path env var run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// A running session that deals `sequence` in order, over and over.
    #[must_use]
    pub fn session_with(sequence: &[TetrominoType]) -> Session {
        let factory = PieceFactory::with_randomizer(SequenceRandomizer::new(sequence.to_vec()));
        let mut session = Session::new(factory, FallCurve::default());
        session.start();
        session
    }

    /// Fills `row` except the listed columns.
    pub fn fill_row(board: &mut Board, row: i32, gaps: &[i32]) {
        let cells: Vec<Cell> = (0..board.width as i32)
            .filter(|x| !gaps.contains(x))
            .map(|x| Cell::new(x, row))
            .collect();
        board
            .add(&cells, TetrominoType::J.get_color())
            .expect("test row must fit on the board");
    }

    #[must_use]
    pub fn sorted(cells: &[Cell]) -> Vec<Cell> {
        let mut cells = cells.to_vec();
        cells.sort();
        cells
    }

    #[must_use]
    pub fn row_cells(row: i32, columns: std::ops::RangeInclusive<i32>) -> Vec<Cell> {
        columns.map(|x| Cell::new(x, row)).collect()
    }

    /// Points the config loader at a fresh temp file for the life of the guard.
    pub struct TempConfig {
        pub path: PathBuf,
        _dir: tempfile::TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    #[must_use]
    pub fn use_temp_config() -> TempConfig {
        let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");

        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &path);
        }

        TempConfig {
            path,
            _dir: dir,
            _guard: guard,
        }
    }
}
