use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::game::board::{Board, CellPos};

// Each cell is drawn two columns wide so it looks square in most terminal fonts
pub const CELL_WIDTH: u16 = 2;
pub const INFO_WIDTH: u16 = 20;

pub struct ScreenLayout {
    pub board: Rect,
    pub info: Rect,
}

pub fn screen_layout(size: Rect, board: &Board) -> ScreenLayout {
    let board_width = board.width() as u16 * CELL_WIDTH + 2; // borders
    let board_height = board.height() as u16 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Length(INFO_WIDTH),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    ScreenLayout {
        board: horizontal_chunks[1],
        info: horizontal_chunks[2],
    }
}

/// Area inside the board's border where cells are painted.
pub fn cells_area(board_area: Rect) -> Rect {
    Rect {
        x: board_area.x.saturating_add(1),
        y: board_area.y.saturating_add(1),
        width: board_area.width.saturating_sub(2),
        height: board_area.height.saturating_sub(2),
    }
}

#[cfg(test)]
pub fn cell_rect(cells: Rect, pos: CellPos) -> Rect {
    Rect {
        x: cells.x + pos.col as u16 * CELL_WIDTH,
        y: cells.y + pos.row as u16,
        width: CELL_WIDTH,
        height: 1,
    }
}

/// Resolves a terminal position to the board cell drawn under it.
pub fn cell_at(board_area: Rect, board: &Board, column: u16, row: u16) -> Option<CellPos> {
    let cells = cells_area(board_area);
    if column < cells.x || row < cells.y || column >= cells.right() || row >= cells.bottom() {
        return None;
    }

    let pos = CellPos::new((row - cells.y) as usize, ((column - cells.x) / CELL_WIDTH) as usize);
    (pos.row < board.height() && pos.col < board.width()).then_some(pos)
}
