use rand::Rng;
use thiserror::Error;

use crate::constants::PALETTE;

pub type ColorId = u8;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const ORIGIN: CellPos = CellPos { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[cfg(test)]
    #[error("board must have at least one row and one column")]
    Empty,
    #[cfg(test)]
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[cfg(test)]
    #[error("color {color} is outside the palette of {palette_size}")]
    InvalidColor { color: ColorId, palette_size: usize },
}

/// Row-major grid of palette indices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    palette_size: usize,
    cells: Vec<ColorId>,
}

impl Board {
    /// Fills every cell independently with a uniform color in `0..palette_size`.
    pub fn random<R: Rng>(width: usize, height: usize, palette_size: usize, rng: &mut R) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            (1..=PALETTE.len()).contains(&palette_size),
            "palette size must be within 1..={}",
            PALETTE.len()
        );

        let cells = (0..width * height)
            .map(|_| rng.gen_range(0..palette_size) as ColorId)
            .collect();

        Self { width, height, palette_size, cells }
    }

    #[cfg(test)]
    pub fn from_rows(rows: &[Vec<ColorId>], palette_size: usize) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(BoardError::Ragged { row, len: values.len(), expected: width });
            }
            if let Some(&color) = values.iter().find(|&&c| c as usize >= palette_size) {
                return Err(BoardError::InvalidColor { color, palette_size });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { width, height: rows.len(), palette_size, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn get(&self, row: i32, col: i32) -> Result<ColorId, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.cells[self.index(row as usize, col as usize)])
    }

    pub fn at(&self, pos: CellPos) -> ColorId {
        self.cells[self.index(pos.row, pos.col)]
    }

    /// Callers check bounds first; an out-of-range write is a bug.
    pub fn set(&mut self, row: usize, col: usize, color: ColorId) {
        assert!(
            row < self.height && col < self.width,
            "write to ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        debug_assert!((color as usize) < self.palette_size);
        let index = self.index(row, col);
        self.cells[index] = color;
    }

    pub fn origin_color(&self) -> ColorId {
        self.cells[0]
    }

    pub fn is_uniform(&self) -> bool {
        let origin = self.origin_color();
        self.cells.iter().all(|&cell| cell == origin)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorId]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_board_stays_within_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(14, 14, 6, &mut rng);

        assert_eq!(board.width(), 14);
        assert_eq!(board.height(), 14);
        assert!(board.rows().flatten().all(|&c| c < 6));
        assert_eq!(board.rows().count(), 14);
    }

    #[test]
    fn random_board_is_rectangular_for_non_square_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::random(5, 3, 8, &mut rng);

        assert_eq!(board.rows().count(), 3);
        assert!(board.rows().all(|row| row.len() == 5));
        assert!(board.get(2, 4).is_ok());
        assert!(board.get(4, 2).is_err());
    }

    #[test]
    fn same_seed_builds_same_board() {
        let a = Board::random(10, 10, 8, &mut StdRng::seed_from_u64(42));
        let b = Board::random(10, 10, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let board = Board::from_rows(&[vec![0, 1], vec![2, 3]], 4).unwrap();

        assert_eq!(board.get(1, 0), Ok(2));
        assert_eq!(board.get(-1, 0), Err(BoardError::OutOfBounds { row: -1, col: 0 }));
        assert_eq!(board.get(0, -1), Err(BoardError::OutOfBounds { row: 0, col: -1 }));
        assert_eq!(board.get(2, 0), Err(BoardError::OutOfBounds { row: 2, col: 0 }));
        assert_eq!(board.get(0, 2), Err(BoardError::OutOfBounds { row: 0, col: 2 }));
    }

    #[test]
    fn set_writes_single_cell() {
        let mut board = Board::from_rows(&[vec![0, 0], vec![0, 0]], 2).unwrap();
        board.set(1, 1, 1);

        assert_eq!(board.get(1, 1), Ok(1));
        assert_eq!(board.rows().flatten().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds_panics() {
        let mut board = Board::from_rows(&[vec![0]], 1).unwrap();
        board.set(0, 1, 0);
    }

    #[test]
    fn is_uniform_compares_against_origin() {
        let uniform = Board::from_rows(&[vec![3, 3], vec![3, 3]], 4).unwrap();
        let mixed = Board::from_rows(&[vec![3, 3], vec![3, 2]], 4).unwrap();

        assert!(uniform.is_uniform());
        assert!(!mixed.is_uniform());
    }

    #[test]
    fn from_rows_validates_shape_and_colors() {
        assert_eq!(Board::from_rows(&[], 2), Err(BoardError::Empty));
        assert_eq!(
            Board::from_rows(&[vec![0, 1], vec![0]], 2),
            Err(BoardError::Ragged { row: 1, len: 1, expected: 2 })
        );
        assert_eq!(
            Board::from_rows(&[vec![0, 5]], 4),
            Err(BoardError::InvalidColor { color: 5, palette_size: 4 })
        );
    }
}
