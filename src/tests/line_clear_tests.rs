#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::components::{Cell, TetrominoType};
    use crate::line_clear::{LineClear, clear, score_for};
    use crate::tests::test_utils::fill_row;

    #[test]
    fn test_score_table() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 100);
        assert_eq!(score_for(2), 200);
        assert_eq!(score_for(3), 300);
        assert_eq!(score_for(4), 800);
    }

    #[test]
    fn test_no_full_rows_is_a_no_op() {
        let mut board = Board::default();
        fill_row(&mut board, 19, &[9]);
        let before = board.clone();

        let result = clear(&mut board);

        assert_eq!(result, LineClear::default());
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_row() {
        let mut board = Board::default();
        fill_row(&mut board, 19, &[]);
        board
            .add(&[Cell::new(6, 18)], TetrominoType::T.get_color())
            .unwrap();

        let result = clear(&mut board);

        assert_eq!(
            result,
            LineClear {
                rows_cleared: 1,
                score_delta: 100
            }
        );
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(Cell::new(6, 19)));
    }

    #[test]
    fn test_tetris() {
        let mut board = Board::default();
        for row in 16..20 {
            fill_row(&mut board, row, &[]);
        }
        fill_row(&mut board, 15, &[0]);

        let result = clear(&mut board);

        assert_eq!(result.rows_cleared, 4);
        assert_eq!(result.score_delta, 800);
        assert_eq!(board.occupied_count(), 9);
        assert!(!board.is_occupied(Cell::new(0, 19)));
        assert!(board.is_occupied(Cell::new(1, 19)));
    }

    #[test]
    fn test_split_rows() {
        let mut board = Board::default();
        fill_row(&mut board, 19, &[]);
        fill_row(&mut board, 18, &[3]);
        fill_row(&mut board, 17, &[]);

        let result = clear(&mut board);

        assert_eq!(result.score_delta, 200);
        assert_eq!(board.occupied_count(), 9);
        assert!(!board.is_occupied(Cell::new(3, 19)));
        assert!(board.is_occupied(Cell::new(4, 19)));
        assert!(!board.is_occupied(Cell::new(4, 18)));
    }
}
