#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Score scaling is coarse; truncating fractional milliseconds is intended
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use std::collections::VecDeque;
use std::time::Duration;

use bevy_ecs::prelude::*;
use log::{debug, error, info, trace};

use crate::board::Board;
use crate::components::{Direction, InputEvent};
use crate::error::EngineError;
use crate::factory::PieceFactory;
use crate::game::{
    BASE_FALL_INTERVAL_MS, FALL_SPEEDUP_PER_POINT, MIN_FALL_INTERVAL_MS, PREVIEW_LEN,
};
use crate::line_clear;
use crate::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    GameOver,
}

/// How the gravity interval shrinks as the score grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallCurve {
    pub base_ms: u64,
    pub min_ms: u64,
    pub speedup_per_point: f64,
}

impl FallCurve {
    /// `max(min, base - speedup * score)`; never increases with score.
    #[must_use]
    pub fn interval(&self, score: u32) -> Duration {
        let reduction = (f64::from(score) * self.speedup_per_point) as u64;
        Duration::from_millis(self.base_ms.saturating_sub(reduction).max(self.min_ms))
    }
}

impl Default for FallCurve {
    fn default() -> Self {
        Self {
            base_ms: BASE_FALL_INTERVAL_MS,
            min_ms: MIN_FALL_INTERVAL_MS,
            speedup_per_point: FALL_SPEEDUP_PER_POINT,
        }
    }
}

/// One game from start screen to game over.
///
/// Owns the board, the falling piece, the hold slot, the preview queue and all
/// timers. Everything the front end draws is read through the accessors here.
#[derive(Resource, Debug)]
pub struct Session {
    state: SessionState,
    board: Board,
    active: Option<Piece>,
    held: Option<Piece>,
    preview: VecDeque<Piece>,
    factory: PieceFactory,
    curve: FallCurve,
    score: u32,
    lines_cleared: u32,
    pieces_placed: u32,
    elapsed: Duration,
    fall_timer: Duration,
    lock_timer: Duration,
    hold_used: bool,
    last_locked: Option<Piece>,
    should_quit: bool,
}

impl Session {
    #[must_use]
    pub fn new(factory: PieceFactory, curve: FallCurve) -> Self {
        Self {
            state: SessionState::Idle,
            board: Board::default(),
            active: None,
            held: None,
            preview: VecDeque::with_capacity(PREVIEW_LEN),
            factory,
            curve,
            score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            elapsed: Duration::ZERO,
            fall_timer: Duration::ZERO,
            lock_timer: Duration::ZERO,
            hold_used: false,
            last_locked: None,
            should_quit: false,
        }
    }

    /// Idle -> Running: deals the first piece and fills the preview queue.
    pub fn start(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }

        let first = self.factory.next();
        self.preview = self.factory.fill_queue(PREVIEW_LEN);
        self.active = Some(first);
        self.state = SessionState::Running;
        info!("Game started with {} piece", first.tetromino_type().name());
    }

    /// Discards the current game and returns to a fresh Idle session.
    pub fn restart(&mut self) {
        info!("Restarting session (previous score {})", self.score);
        self.state = SessionState::Idle;
        self.board.clear();
        self.active = None;
        self.held = None;
        self.preview.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_placed = 0;
        self.elapsed = Duration::ZERO;
        self.fall_timer = Duration::ZERO;
        self.lock_timer = Duration::ZERO;
        self.hold_used = false;
        self.last_locked = None;
        self.should_quit = false;
    }

    /// Advances the simulation by one fixed step of `delta`.
    pub fn tick(&mut self, delta: Duration) -> Result<(), EngineError> {
        if self.state != SessionState::Running {
            return Ok(());
        }

        self.elapsed += delta;
        self.fall_timer += delta;
        let interval = self.fall_interval();

        let board = &self.board;
        if let Some(piece) = self.active.as_mut() {
            if self.fall_timer >= interval {
                self.fall_timer = Duration::ZERO;
                piece.shift(Direction::Down, board);
            }

            if !piece.is_locked() {
                if piece.can_move(Direction::Down, board) {
                    self.lock_timer = Duration::ZERO;
                } else {
                    self.lock_timer += delta;
                    if self.lock_timer >= interval {
                        trace!("Lock delay of {interval:?} expired");
                        piece.lock();
                    }
                }
            }
        }

        self.settle()
    }

    /// Applies one player command. Only `Quit` is honoured outside a running game.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), EngineError> {
        match event {
            InputEvent::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                return Ok(());
            }
            _ if self.state != SessionState::Running => return Ok(()),
            InputEvent::Hold => {
                self.hold();
                return Ok(());
            }
            _ => {}
        }

        let Some((piece, board)) = self.piece_and_board() else {
            return Ok(());
        };

        match event {
            InputEvent::MoveLeft => {
                piece.shift(Direction::Left, board);
            }
            InputEvent::MoveRight => {
                piece.shift(Direction::Right, board);
            }
            InputEvent::SoftDrop => {
                piece.shift(Direction::Down, board);
            }
            InputEvent::Rotate => {
                piece.rotate(board);
            }
            InputEvent::HardDrop => {
                let rows = piece.hard_drop(board);
                debug!("Hard drop fell {rows} rows");
            }
            InputEvent::Hold | InputEvent::Quit => {}
        }

        self.settle()
    }

    fn piece_and_board(&mut self) -> Option<(&mut Piece, &Board)> {
        let board = &self.board;
        self.active.as_mut().map(|piece| (piece, board))
    }

    // Lock -> settle -> respawn -> clear -> game-over check
    fn settle(&mut self) -> Result<(), EngineError> {
        if let Some(piece) = self.active.filter(Piece::is_locked) {
            self.board
                .add(piece.cells(), piece.color())
                .inspect_err(|err| {
                    error!(
                        "Could not settle {} piece: {err}",
                        piece.tetromino_type().name()
                    );
                })?;

            self.pieces_placed += 1;
            self.hold_used = false;
            self.fall_timer = Duration::ZERO;
            self.lock_timer = Duration::ZERO;
            self.last_locked = Some(piece);
            info!(
                "Locked {} piece (#{})",
                piece.tetromino_type().name(),
                self.pieces_placed
            );

            self.active = Some(self.next_from_queue());
        }

        let cleared = line_clear::clear(&mut self.board);
        self.score += cleared.score_delta;
        self.lines_cleared += cleared.rows_cleared;

        let blocked_out = self.active.is_some_and(|piece| {
            piece
                .cells()
                .iter()
                .any(|&cell| self.board.is_occupied(cell))
        });
        if self.board.has_cells_above_top() || blocked_out {
            self.state = SessionState::GameOver;
            info!(
                "Game over: score {}, {} pieces, {:.2}s",
                self.score,
                self.pieces_placed,
                self.elapsed.as_secs_f64()
            );
        }

        Ok(())
    }

    fn next_from_queue(&mut self) -> Piece {
        let next = self
            .preview
            .pop_front()
            .unwrap_or_else(|| self.factory.next());
        self.preview.push_back(self.factory.next());
        debug!("Spawned {} piece", next.tetromino_type().name());
        next
    }

    fn hold(&mut self) {
        if self.hold_used {
            debug!("Hold already used for this piece");
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let incoming = match self.held.take() {
            Some(held) => held.respawned(),
            None => self.next_from_queue(),
        };
        debug!(
            "Holding {} piece, playing {}",
            active.tetromino_type().name(),
            incoming.tetromino_type().name()
        );

        self.held = Some(active.respawned());
        self.active = Some(incoming);
        self.hold_used = true;
        self.fall_timer = Duration::ZERO;
        self.lock_timer = Duration::ZERO;
    }

    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.curve.interval(self.score)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Landing shadow of the active piece.
    #[must_use]
    pub fn ghost(&self) -> Option<Piece> {
        self.active.map(|piece| piece.ghost(&self.board))
    }

    #[must_use]
    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> &VecDeque<Piece> {
        &self.preview
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    #[must_use]
    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    /// The most recently settled piece, as it was when it locked.
    #[must_use]
    pub fn last_locked(&self) -> Option<&Piece> {
        self.last_locked.as_ref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PieceFactory::new(), FallCurve::default())
    }
}
