#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::TetrominoType;
    use crate::factory::{PieceFactory, Randomizer, SequenceRandomizer, UniformRandomizer};
    use crate::piece::{Piece, PieceState};

    #[test]
    fn test_sequence_randomizer_cycles() {
        let mut randomizer = SequenceRandomizer::new(vec![TetrominoType::S, TetrominoType::Z]);

        let drawn: Vec<TetrominoType> = (0..5).map(|_| randomizer.next_type()).collect();

        assert_eq!(
            drawn,
            vec![
                TetrominoType::S,
                TetrominoType::Z,
                TetrominoType::S,
                TetrominoType::Z,
                TetrominoType::S
            ]
        );
    }

    #[test]
    fn test_empty_sequence_falls_back_to_o() {
        let mut randomizer = SequenceRandomizer::new(Vec::new());
        assert_eq!(randomizer.next_type(), TetrominoType::O);
    }

    #[test]
    fn test_seeded_randomizers_agree() {
        let mut a = UniformRandomizer::with_seed(42);
        let mut b = UniformRandomizer::with_seed(42);

        for _ in 0..50 {
            assert_eq!(a.next_type(), b.next_type());
        }
    }

    #[test]
    fn test_uniform_randomizer_deals_every_shape() {
        let mut randomizer = UniformRandomizer::with_seed(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(randomizer.next_type());
        }

        assert_eq!(seen.len(), TetrominoType::ALL.len());
    }

    #[test]
    fn test_factory_pieces_start_in_spawn_pose() {
        let mut factory = PieceFactory::with_randomizer(SequenceRandomizer::new(vec![
            TetrominoType::T,
        ]));

        let piece = factory.next();

        assert_eq!(piece, Piece::spawn(TetrominoType::T));
        assert_eq!(piece.state(), PieceState::Spawned);
    }

    #[test]
    fn test_fill_queue_keeps_deal_order() {
        let mut factory = PieceFactory::with_randomizer(SequenceRandomizer::new(vec![
            TetrominoType::I,
            TetrominoType::J,
            TetrominoType::L,
        ]));

        let queue = factory.fill_queue(3);

        let types: Vec<TetrominoType> = queue.iter().map(Piece::tetromino_type).collect();
        assert_eq!(
            types,
            vec![TetrominoType::I, TetrominoType::J, TetrominoType::L]
        );
    }

    #[test]
    fn test_pieces_are_independent_values() {
        let mut factory = PieceFactory::with_seed(3);
        let queue = factory.fill_queue(2);
        let mut first = queue[0];

        first.lock();

        assert!(!queue[0].is_locked());
    }
}
