use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// Configuration for the start screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: TitleConfig,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub title_height: u16,
    // Blank columns between block letters
    pub letter_spacing: u16,
    // Extra rows kept clear of falling pieces under the title
    pub protection_margin: u16,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            title_height: 5,
            letter_spacing: 1,
            protection_margin: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    // Falling background pieces
    pub initial_tetromino_count: usize,
    pub tetromino_max_count: usize,
    pub tetromino_min_fall_speed: f32,
    pub tetromino_max_fall_speed: f32,
    pub tetromino_spawn_interval_ms: u64,

    // Color cycling
    pub title_color_cycle_interval_ms: u64,
    pub title_colors: Vec<TitleColor>,

    // Layout
    pub menu_title_height: u16,
    pub menu_option_width: u16,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            initial_tetromino_count: 5,
            tetromino_max_count: 12,
            tetromino_min_fall_speed: 0.3,
            tetromino_max_fall_speed: 1.0,
            tetromino_spawn_interval_ms: 600,

            title_color_cycle_interval_ms: 150,
            title_colors: vec![
                TitleColor::Cyan,
                TitleColor::Blue,
                TitleColor::Custom(255, 127, 0),
                TitleColor::Yellow,
                TitleColor::Green,
                TitleColor::Red,
                TitleColor::Magenta,
            ],

            menu_title_height: 10,
            menu_option_width: 20,
        }
    }
}

// Supported colors for serialization/deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Custom(u8, u8, u8),
}

impl From<TitleColor> for Color {
    fn from(color: TitleColor) -> Self {
        match color {
            TitleColor::Red => Color::Red,
            TitleColor::Green => Color::Green,
            TitleColor::Yellow => Color::Yellow,
            TitleColor::Blue => Color::Blue,
            TitleColor::Magenta => Color::Magenta,
            TitleColor::Cyan => Color::Cyan,
            TitleColor::White => Color::White,
            TitleColor::Gray => Color::Gray,
            TitleColor::Custom(r, g, b) => Color::Rgb(r, g, b),
        }
    }
}
