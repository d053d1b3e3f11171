#![warn(clippy::all, clippy::pedantic)]

use crate::config::DisplayConfig;
use crate::menu_types::{Menu, OptionsOption};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Renders the options menu
pub fn render_options_menu(f: &mut Frame, area: Rect, menu: &Menu, display: &DisplayConfig) {
    let options = [
        (
            OptionsOption::GhostToggle,
            format!("Ghost piece: {}", on_off(display.show_ghost)),
        ),
        (
            OptionsOption::GridToggle,
            format!("Grid: {}", on_off(display.show_grid)),
        ),
        (OptionsOption::Back, "Back".to_string()),
    ];

    let lines: Vec<Line> = options
        .into_iter()
        .map(|(option, label)| {
            let style = if option == menu.options_selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![Span::styled(label, style)])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
