pub mod loader;
pub mod menu;

use serde::{Deserialize, Serialize};

use crate::factory::PieceFactory;
use crate::game::{BASE_FALL_INTERVAL_MS, FALL_SPEEDUP_PER_POINT, MIN_FALL_INTERVAL_MS};
use crate::session::FallCurve;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub display: DisplayConfig,
    pub menu: menu::MenuConfig,
}

// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub base_fall_interval_ms: u64,
    pub min_fall_interval_ms: u64,
    pub fall_speedup_per_point: f64,
    pub tick_ms: u64,
    // Fixed seed for a repeatable piece sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            base_fall_interval_ms: BASE_FALL_INTERVAL_MS,
            min_fall_interval_ms: MIN_FALL_INTERVAL_MS,
            fall_speedup_per_point: FALL_SPEEDUP_PER_POINT,
            tick_ms: 16,
            seed: None,
        }
    }
}

impl GameplayConfig {
    #[must_use]
    pub fn fall_curve(&self) -> FallCurve {
        FallCurve {
            base_ms: self.base_fall_interval_ms,
            min_ms: self.min_fall_interval_ms.min(self.base_fall_interval_ms),
            speedup_per_point: self.fall_speedup_per_point.max(0.0),
        }
    }

    #[must_use]
    pub fn piece_factory(&self) -> PieceFactory {
        match self.seed {
            Some(seed) => PieceFactory::with_seed(seed),
            None => PieceFactory::new(),
        }
    }
}

// Playfield drawing toggles, editable from the options screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_ghost: bool,
    pub show_grid: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ghost: true,
            show_grid: false,
        }
    }
}
