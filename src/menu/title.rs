#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::Paragraph,
};

use super::renderer::centered_rect;
use crate::config::menu::TitleConfig;

// Block letters for "TETRIS", five rows each
pub const TITLE_LETTERS: [&str; 6] = [
    // T
    "███\n █ \n █ \n █ \n █ ",
    // E
    "███\n█  \n██ \n█  \n███",
    // T
    "███\n █ \n █ \n █ \n █ ",
    // R
    "██ \n█ █\n██ \n█ █\n█ █",
    // I
    "███\n █ \n █ \n █ \n███",
    // S
    " ██\n█  \n █ \n  █\n██ ",
];

fn letter_width(letter: &str) -> u16 {
    letter.lines().next().map_or(0, |line| line.chars().count()) as u16
}

/// Width of the whole title including letter spacing.
#[must_use]
pub fn title_width(config: &TitleConfig) -> u16 {
    let letters: u16 = TITLE_LETTERS.iter().map(|letter| letter_width(letter)).sum();
    let gaps = (TITLE_LETTERS.len() as u16 - 1) * config.letter_spacing;
    letters + gaps
}

/// Renders the block-letter title, one color per letter
pub fn render_ascii_title(f: &mut Frame, area: Rect, colors: &[Color], config: &TitleConfig) {
    let title_area = centered_rect(title_width(config), config.title_height, area);
    let mut current_x = title_area.x;

    for (i, letter) in TITLE_LETTERS.iter().enumerate() {
        let width = letter_width(letter);
        let letter_area = Rect::new(current_x, title_area.y, width, config.title_height)
            .intersection(area);

        let color = if colors.is_empty() {
            Color::White
        } else {
            colors[i % colors.len()]
        };
        let paragraph = Paragraph::new(Text::from(*letter)).style(Style::default().fg(color));
        f.render_widget(paragraph, letter_area);

        current_x = current_x.saturating_add(width + config.letter_spacing);
    }
}

/// The band at the top of the screen kept clear of background pieces
#[must_use]
pub fn get_title_protection_zone(area: Rect, config: &TitleConfig) -> Rect {
    let title_area = centered_rect(
        title_width(config),
        config.title_height,
        Rect::new(0, 0, area.width, 10),
    );

    Rect::new(
        0,
        0,
        area.width,
        title_area.y + title_area.height + config.protection_margin,
    )
}
