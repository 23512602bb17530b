use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{HOVER_RGB, PALETTE};
use crate::game::board::{CellPos, ColorId};
use crate::game::Game;
use crate::ui::layout::screen_layout;

const TITLE: &str = "Flood It!";
const HOVER_ALPHA: u16 = 63;

pub fn ui(f: &mut Frame, game: &Game) {
    let layout = screen_layout(f.size(), &game.board);

    render_board(f, game, layout.board);
    render_info(f, game, layout.info);
}

pub fn cell_color(color: ColorId) -> Color {
    PALETTE[color as usize % PALETTE.len()]
}

// Alpha-blends the highlight over a cell color
fn highlight(base: Color) -> Color {
    let (hr, hg, hb) = HOVER_RGB;
    match base {
        Color::Rgb(r, g, b) => Color::Rgb(blend(r, hr), blend(g, hg), blend(b, hb)),
        other => other,
    }
}

fn blend(base: u8, over: u8) -> u8 {
    let base = base as u16;
    let over = over as u16;
    ((over * HOVER_ALPHA + base * (255 - HOVER_ALPHA)) / 255) as u8
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let board_lines: Vec<Line> = game
        .board
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, &color)| {
                    let mut fg = cell_color(color);
                    if game.hover == Some(CellPos::new(y, x)) {
                        fg = highlight(fg);
                    }
                    Span::styled("██", Style::default().fg(fg))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title(TITLE));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, game: &Game, area: Rect) {
    let legend: Vec<Span> = (0..game.board.palette_size())
        .map(|c| Span::styled("██", Style::default().fg(cell_color(c as ColorId))))
        .collect();

    let info_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Moves", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.moves.to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Current", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::styled("████", Style::default().fg(cell_color(game.active_color)))]),
        Line::from(vec![Span::raw("")]),
        Line::from(legend),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Click a cell")]),
        Line::from(vec![Span::raw("Enter: restart")]),
        Line::from(vec![Span::raw("Q: quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}
