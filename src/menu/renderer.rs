#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Screen coordinates are small; float <-> int casts stay in range
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
};

use super::main_menu::render_main_menu_options;
use super::options_menu::render_options_menu;
use super::title::{get_title_protection_zone, render_ascii_title};
use crate::app::App;
use crate::components::TetrominoType;
use crate::config::menu::MenuConfig;
use crate::menu_types::{Menu, MenuOption, MenuState, OptionsOption};
use crate::ui::to_terminal_color;

// Pieces are dropped once they fall this many rows below the top
const FALL_LIMIT: f32 = 120.0;
// Background pieces advance by their speed once per step
const FALL_STEP: Duration = Duration::from_millis(50);

/// A decorative piece drifting down behind the title screen.
#[derive(Debug, Clone)]
pub struct BackgroundPiece {
    pub tetromino_type: TetrominoType,
    // Horizontal position as a fraction of the screen width
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

pub struct MenuRenderer {
    pub pieces: Vec<BackgroundPiece>,
    pub last_piece_spawn: Instant,
    pub title_colors: Vec<Color>,
    pub color_change_time: Instant,
    last_fall: Instant,
    rng: fastrand::Rng,
}

impl MenuRenderer {
    pub fn new(config: &MenuConfig) -> Self {
        let renderer_config = &config.renderer;
        let mut renderer = Self {
            pieces: Vec::with_capacity(renderer_config.tetromino_max_count),
            last_piece_spawn: Instant::now(),
            title_colors: renderer_config
                .title_colors
                .iter()
                .map(|&color| color.into())
                .collect(),
            color_change_time: Instant::now(),
            last_fall: Instant::now(),
            rng: fastrand::Rng::new(),
        };

        // Start the first wave already on screen at staggered heights
        for _ in 0..renderer_config.initial_tetromino_count {
            let y = renderer.rng.f32() * 20.0;
            renderer.spawn_piece(config, y);
        }

        renderer
    }

    fn spawn_piece(&mut self, config: &MenuConfig, y: f32) {
        let renderer_config = &config.renderer;
        let speed_range =
            renderer_config.tetromino_max_fall_speed - renderer_config.tetromino_min_fall_speed;

        self.pieces.push(BackgroundPiece {
            tetromino_type: TetrominoType::from_index(self.rng.usize(0..7)),
            x: self.rng.f32(),
            y,
            speed: renderer_config.tetromino_min_fall_speed + self.rng.f32() * speed_range,
        });
    }

    pub fn next_option(&mut self, menu: &mut Menu) {
        match menu.state {
            MenuState::MainMenu => {
                menu.selected_option = match menu.selected_option {
                    MenuOption::NewGame => MenuOption::Options,
                    MenuOption::Options => MenuOption::Quit,
                    MenuOption::Quit => MenuOption::NewGame,
                };
            }
            MenuState::Options => {
                menu.options_selected = match menu.options_selected {
                    OptionsOption::GhostToggle => OptionsOption::GridToggle,
                    OptionsOption::GridToggle => OptionsOption::Back,
                    OptionsOption::Back => OptionsOption::GhostToggle,
                };
            }
            MenuState::Game => {}
        }
    }

    pub fn prev_option(&mut self, menu: &mut Menu) {
        match menu.state {
            MenuState::MainMenu => {
                menu.selected_option = match menu.selected_option {
                    MenuOption::NewGame => MenuOption::Quit,
                    MenuOption::Options => MenuOption::NewGame,
                    MenuOption::Quit => MenuOption::Options,
                };
            }
            MenuState::Options => {
                menu.options_selected = match menu.options_selected {
                    OptionsOption::GhostToggle => OptionsOption::Back,
                    OptionsOption::GridToggle => OptionsOption::GhostToggle,
                    OptionsOption::Back => OptionsOption::GridToggle,
                };
            }
            MenuState::Game => {}
        }
    }

    pub fn update(&mut self, config: &MenuConfig) {
        let renderer_config = &config.renderer;

        if !self.title_colors.is_empty()
            && self.color_change_time.elapsed()
                > Duration::from_millis(renderer_config.title_color_cycle_interval_ms)
        {
            self.color_change_time = Instant::now();
            self.title_colors.rotate_left(1);
        }

        if self.last_piece_spawn.elapsed()
            > Duration::from_millis(renderer_config.tetromino_spawn_interval_ms)
        {
            self.last_piece_spawn = Instant::now();
            if self.pieces.len() < renderer_config.tetromino_max_count {
                self.spawn_piece(config, -4.0);
            }
        }

        if self.last_fall.elapsed() >= FALL_STEP {
            self.last_fall = Instant::now();
            self.advance_pieces();
        }
    }

    /// Moves every background piece down one step and drops those off screen.
    pub fn advance_pieces(&mut self) {
        for piece in &mut self.pieces {
            piece.y += piece.speed;
        }
        self.pieces.retain(|piece| piece.y < FALL_LIMIT);
    }

    pub fn render_menu(f: &mut Frame, app: &App) {
        let config = &app.config.menu;
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(config.renderer.menu_title_height),
                Constraint::Min(0),
            ])
            .split(area);

        // Background first so everything else draws over it
        render_background_pieces(f, &app.menu_renderer, config, area);

        render_ascii_title(f, chunks[0], &app.menu_renderer.title_colors, &config.title);

        let options_area = centered_rect(
            config.renderer.menu_option_width,
            chunks[1].height.min(5),
            chunks[1],
        );
        match app.menu.state {
            MenuState::MainMenu => render_main_menu_options(f, options_area, &app.menu),
            MenuState::Options => {
                render_options_menu(f, options_area, &app.menu, &app.config.display);
            }
            MenuState::Game => {}
        }
    }
}

/// Draws the falling background pieces, skipping the title and option areas
fn render_background_pieces(f: &mut Frame, renderer: &MenuRenderer, config: &MenuConfig, area: Rect) {
    let protection = get_title_protection_zone(area, &config.title);
    let menu_area = Rect::new(
        (area.width / 2).saturating_sub(config.renderer.menu_option_width / 2),
        protection.height,
        config.renderer.menu_option_width,
        6,
    );

    // Terminal cells are roughly twice as tall as wide
    let x_scale: i32 = 2;

    for piece in &renderer.pieces {
        let color = to_terminal_color(piece.tetromino_type.get_color());
        let base_x = (piece.x * f32::from(area.width)) as i32;
        let base_y = piece.y as i32;

        for (dx, dy) in piece.tetromino_type.get_blocks() {
            let x = base_x + dx * x_scale;
            let y = base_y + dy;

            if x < 0 || y < 0 || x + x_scale > i32::from(area.width) || y >= i32::from(area.height) {
                continue;
            }
            if y < i32::from(protection.height) {
                continue;
            }

            let block_rect = Rect::new(x as u16, y as u16, x_scale as u16, 1);
            if overlaps(block_rect, menu_area) {
                continue;
            }

            f.render_widget(Block::default().style(Style::default().bg(color)), block_rect);
        }
    }
}

/// Helper function to check if two rectangles overlap
#[must_use]
pub fn overlaps(r1: Rect, r2: Rect) -> bool {
    r1.x < r2.x + r2.width
        && r1.x + r1.width > r2.x
        && r1.y < r2.y + r2.height
        && r1.y + r1.height > r2.y
}

/// Helper function to create a centered rectangle inside another rectangle
#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;

    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
