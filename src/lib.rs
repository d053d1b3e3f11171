pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod factory;
pub mod game;
pub mod line_clear;
pub mod menu;
pub mod menu_types;
pub mod piece;
pub mod session;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

// Steps replayed per frame at most, so a stalled terminal cannot snowball
const MAX_STEPS_PER_UPDATE: u32 = 5;

/// Fixed-timestep clock driving the simulation.
///
/// Wall time is banked by [`Time::update`] and paid out in whole steps by
/// [`Time::consume_step`], so the game advances at the same rate whatever the
/// render framerate.
#[derive(Resource, Debug, Clone)]
pub struct Time {
    step: Duration,
    accumulated: Duration,
    last_update: Instant,
}

impl Time {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulated: Duration::ZERO,
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.advance(now.duration_since(self.last_update));
        self.last_update = now;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.accumulated = (self.accumulated + elapsed).min(self.step * MAX_STEPS_PER_UPDATE);
    }

    pub fn consume_step(&mut self) -> bool {
        if self.accumulated >= self.step {
            self.accumulated -= self.step;
            true
        } else {
            false
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.last_update = Instant::now();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}
