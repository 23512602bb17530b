use crate::game::board::{Board, CellPos, ColorId};

const NEIGHBOURS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Recolors the region 4-connected to the origin that currently holds
/// `origin`. Returns the number of recolored cells.
pub fn flood(board: &mut Board, target: ColorId, origin: ColorId) -> usize {
    flood_from(board, CellPos::ORIGIN, target, origin)
}

/// Work-list flood fill starting at `start`.
///
/// A cell is recolored before its neighbours are queued, so it can never
/// match `origin` again and is recolored at most once.
pub fn flood_from(board: &mut Board, start: CellPos, target: ColorId, origin: ColorId) -> usize {
    if target == origin {
        return 0;
    }

    let mut recolored = 0;
    let mut pending = vec![(start.row as i32, start.col as i32)];

    while let Some((row, col)) = pending.pop() {
        if !matches!(board.get(row, col), Ok(color) if color == origin) {
            continue;
        }

        board.set(row as usize, col as usize, target);
        recolored += 1;

        for (dr, dc) in NEIGHBOURS {
            let (next_row, next_col) = (row + dr, col + dc);
            if board.contains(next_row, next_col) {
                pending.push((next_row, next_col));
            }
        }
    }

    recolored
}
