#[cfg(test)]
mod cell_tests {
    use crate::components::{Cell, Direction};

    #[test]
    fn test_cell_offset() {
        let cell = Cell::new(5, 10);

        assert_eq!(cell.offset(-1, 0), Cell::new(4, 10));
        assert_eq!(cell.offset(0, 1), Cell::new(5, 11));
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}

#[cfg(test)]
mod tetromino_tests {
    use std::collections::HashSet;

    use crate::components::{Color, TetrominoType};

    #[test]
    fn test_every_template_has_four_blocks() {
        for tetromino_type in TetrominoType::ALL {
            let blocks = tetromino_type.get_blocks();
            let unique: HashSet<(i32, i32)> = blocks.iter().copied().collect();
            assert_eq!(unique.len(), 4, "{}", tetromino_type.name());

            let template = tetromino_type.template();
            for (x, y) in blocks {
                assert_eq!(template[y as usize][x as usize], 1);
            }
        }
    }

    #[test]
    fn test_template_sizes() {
        assert_eq!(TetrominoType::I.template().len(), 4);
        assert_eq!(TetrominoType::O.template().len(), 2);
        for tetromino_type in [
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::T,
        ] {
            assert_eq!(tetromino_type.template().len(), 3);
        }
    }

    #[test]
    fn test_pivots() {
        assert_eq!(TetrominoType::O.pivot(), None);
        assert_eq!(TetrominoType::I.pivot(), Some((2, 1)));
        assert_eq!(TetrominoType::T.pivot(), Some((1, 1)));
    }

    #[test]
    fn test_colors() {
        assert_eq!(TetrominoType::I.get_color(), Color::rgb(0, 255, 255));
        assert_eq!(TetrominoType::O.get_color(), Color::rgb(255, 255, 0));

        let colors: HashSet<Color> = TetrominoType::ALL.iter().map(|t| t.get_color()).collect();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_dimmed_color() {
        assert_eq!(Color::rgb(200, 101, 0).dimmed(), Color::rgb(100, 50, 0));
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(TetrominoType::from_index(0), TetrominoType::I);
        assert_eq!(TetrominoType::from_index(6), TetrominoType::T);
        assert_eq!(TetrominoType::from_index(7), TetrominoType::I);
    }
}

#[cfg(test)]
mod input_tests {
    use crate::components::{Input, InputEvent};

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut input = Input::default();
        input.push(InputEvent::Rotate);
        input.push(InputEvent::HardDrop);

        assert_eq!(input.drain(), vec![InputEvent::Rotate, InputEvent::HardDrop]);
        assert!(input.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut input = Input::default();
        input.push(InputEvent::Hold);

        input.clear();

        assert!(input.is_empty());
    }
}
