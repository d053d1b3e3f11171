#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board coordinates are range-checked before being turned into screen cells
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::app::App;
use crate::components::{Cell, Color as BlockColor, TetrominoType};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::menu::MenuRenderer;
use crate::menu_types::MenuState;
use crate::piece::Piece;
use crate::session::SessionState;
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

// Each cell is two characters wide so blocks look square
const CELL_WIDTH: u16 = 2;
const BOARD_OUTER_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2;
const BOARD_OUTER_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const SIDE_PANEL_WIDTH: u16 = 14;
const INFO_PANEL_WIDTH: u16 = 24;
pub const MIN_WIDTH: u16 = SIDE_PANEL_WIDTH + BOARD_OUTER_WIDTH + INFO_PANEL_WIDTH;
pub const MIN_HEIGHT: u16 = BOARD_OUTER_HEIGHT + 2;

#[must_use]
pub fn to_terminal_color(color: BlockColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn render(f: &mut Frame, app: &App) {
    if app.menu.state == MenuState::Game {
        render_game(f, app);
    } else {
        MenuRenderer::render_menu(f, app);
    }
}

fn render_game(f: &mut Frame, app: &App) {
    // Check if the terminal is too small to render the game properly
    if f.area().width < MIN_WIDTH || f.area().height < MIN_HEIGHT {
        let warning_text = Paragraph::new(format!(
            "Terminal too small!\nNeed at least {MIN_WIDTH}x{MIN_HEIGHT}.\nPlease resize your terminal."
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Tetris"));

        let warning_area = centered_rect(80, 50, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(SIDE_PANEL_WIDTH),
            Constraint::Length(BOARD_OUTER_WIDTH),
            Constraint::Length(INFO_PANEL_WIDTH),
        ])
        .split(f.area());

    let rows = |area: Rect| {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(BOARD_OUTER_HEIGHT),
                Constraint::Fill(1),
            ])
            .split(area)
    };

    let board_column = rows(columns[1]);
    let title = Paragraph::new("TETRIS")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, board_column[0]);

    render_hold(f, app, rows(columns[0])[1]);
    render_board(f, app, board_column[1]);
    render_info(f, app, rows(columns[2])[1]);

    if app.session().state() == SessionState::GameOver {
        render_game_over(f, board_column[1]);
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.config.display.show_grid {
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                if let Some(cell) = f.buffer_mut().cell_mut((inner.x + x * CELL_WIDTH, inner.y + y)) {
                    cell.set_symbol("·");
                    cell.set_fg(Color::DarkGray);
                }
            }
        }
    }

    let session = app.session();
    if app.config.display.show_ghost && session.state() == SessionState::Running {
        if let Some(ghost) = session.ghost() {
            let color = to_terminal_color(ghost.color().dimmed());
            for &cell in ghost.cells() {
                draw_cell(f, inner, cell, "░░", color);
            }
        }
    }

    for (cell, color) in app.get_render_blocks() {
        draw_cell(f, inner, cell, "██", to_terminal_color(color));
    }
}

// Buffer rows are never drawn
fn draw_cell(f: &mut Frame, inner: Rect, cell: Cell, symbol: &str, color: Color) {
    if cell.x < 0 || cell.y < 0 || cell.x >= BOARD_WIDTH as i32 || cell.y >= BOARD_HEIGHT as i32 {
        return;
    }

    let x = inner.x + cell.x as u16 * CELL_WIDTH;
    let y = inner.y + cell.y as u16;
    for (i, ch) in symbol.chars().enumerate() {
        if let Some(buf_cell) = f.buffer_mut().cell_mut((x + i as u16, y)) {
            buf_cell.set_char(ch);
            buf_cell.set_fg(color);
        }
    }
}

/// Draws a shape's template into a small panel area
fn draw_shape(f: &mut Frame, area: Rect, tetromino_type: TetrominoType, color: Color) {
    for (dx, dy) in tetromino_type.get_blocks() {
        let x = area.x + 1 + dx as u16 * CELL_WIDTH;
        let y = area.y + dy as u16;
        if y >= area.bottom() || x + 1 >= area.right() {
            continue;
        }
        for offset in 0..CELL_WIDTH {
            if let Some(cell) = f.buffer_mut().cell_mut((x + offset, y)) {
                cell.set_symbol("█");
                cell.set_fg(color);
            }
        }
    }
}

fn render_hold(f: &mut Frame, app: &App, area: Rect) {
    let hold_area = Rect::new(area.x, area.y, area.width, area.height.min(6));
    let session = app.session();
    let title = if session.hold_used() { "Hold (used)" } else { "Hold" };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(hold_area);
    f.render_widget(block, hold_area);

    if let Some(held) = session.held() {
        let color = if session.hold_used() {
            to_terminal_color(held.color().dimmed())
        } else {
            to_terminal_color(held.color())
        };
        draw_shape(f, inner, held.tetromino_type(), color);
    }
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let preview: Vec<&Piece> = session.preview().iter().collect();
    let next_height = (preview.len() as u16 * 3 + 2).min(area.height);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(next_height),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let next_block = Block::default().borders(Borders::ALL).title("Next");
    let next_inner = next_block.inner(layout[0]);
    f.render_widget(next_block, layout[0]);
    for (i, piece) in preview.iter().enumerate() {
        let slot = Rect::new(
            next_inner.x,
            next_inner.y + i as u16 * 3,
            next_inner.width,
            2,
        )
        .intersection(next_inner);
        draw_shape(f, slot, piece.tetromino_type(), to_terminal_color(piece.color()));
    }

    let stats = format!(
        "Score: {}\nBest: {}\nLines: {}\nPieces: {}\nTime: {:.2}s\nSpeed: {}ms",
        session.score(),
        app.high_score.max(session.score()),
        session.lines_cleared(),
        session.pieces_placed(),
        session.elapsed().as_secs_f64(),
        session.fall_interval().as_millis(),
    );
    let stats_info = Paragraph::new(stats)
        .block(Block::default().borders(Borders::ALL).title("Stats"))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_info, layout[1]);

    let controls = Paragraph::new(
        "←/→: Move\n\
        ↓: Soft drop\n\
        ↑/Z: Rotate\n\
        Space: Hard drop\n\
        C: Hold\n\
        Esc: Menu  Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP).title("Controls"))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, layout[2]);
}

fn render_game_over(f: &mut Frame, board_area: Rect) {
    let area = Rect::new(
        board_area.x + 1,
        board_area.y + board_area.height / 2 - 2,
        board_area.width.saturating_sub(2),
        5,
    );
    let game_over = Paragraph::new(vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Enter: restart"),
        Line::from("Esc: menu"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));

    f.render_widget(Clear, area);
    f.render_widget(game_over, area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
