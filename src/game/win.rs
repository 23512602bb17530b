use crate::game::board::Board;

/// The board is won once every cell carries the origin color.
pub fn check_win(board: &Board) -> bool {
    board.is_uniform()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_board_is_won() {
        let board = Board::from_rows(&[vec![4]], 8).unwrap();
        assert!(check_win(&board));
    }

    #[test]
    fn uniform_board_is_won() {
        let board = Board::from_rows(&vec![vec![2; 5]; 5], 8).unwrap();
        assert!(check_win(&board));
    }

    #[test]
    fn agrees_with_board_uniformity() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(12);
        for colors in 1..=3 {
            for _ in 0..20 {
                let board = Board::random(2, 2, colors, &mut rng);
                assert_eq!(check_win(&board), board.is_uniform());
            }
        }
    }

    #[test]
    fn any_second_color_means_not_won() {
        for row in 0..3 {
            for col in 0..3 {
                let mut board = Board::from_rows(&vec![vec![1; 3]; 3], 8).unwrap();
                board.set(row, col, 5);
                assert!(!check_win(&board), "differing cell at ({row}, {col})");
            }
        }
    }
}
