#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::app::App;
    use crate::components::{InputEvent, TetrominoType};
    use crate::config::Config;
    use crate::game::BOARD_WIDTH;
    use crate::session::{Session, SessionState};
    use crate::systems::{game_tick_system, input_system};
    use crate::tests::test_utils::session_with;

    #[test]
    fn test_seeded_game_runs_to_game_over() {
        let mut config = Config::default();
        config.gameplay.seed = Some(2024);
        let mut app = App::new(config);
        app.start_game();

        let mut drops = 0;
        while app.session().state() == SessionState::Running && drops < 500 {
            app.push_input(InputEvent::HardDrop);
            input_system(&mut app.world).unwrap();
            drops += 1;

            let session = app.session();
            if session.state() == SessionState::Running {
                assert_eq!(session.preview().len(), 3);
                assert!(!session.board().has_cells_above_top());
                assert!(session.board().full_rows().is_empty());
            }
        }

        let session = app.session();
        assert_eq!(session.state(), SessionState::GameOver);
        assert_eq!(session.pieces_placed(), drops);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = || {
            let mut config = Config::default();
            config.gameplay.seed = Some(77);
            let mut app = App::new(config);
            app.start_game();
            for _ in 0..30 {
                app.push_input(InputEvent::MoveLeft);
                app.push_input(InputEvent::HardDrop);
                input_system(&mut app.world).unwrap();
            }
            let session = app.session();
            (
                session.board().clone(),
                session.score(),
                session.pieces_placed(),
            )
        };

        assert_eq!(play(), play());
    }

    #[test]
    fn test_gravity_alone_stacks_pieces() {
        let mut app = App::default();
        app.world.insert_resource(session_with(&[TetrominoType::O]));

        // 48 simulated seconds; each O needs about 21 to fall and lock
        for _ in 0..600 {
            app.world
                .resource_mut::<crate::Time>()
                .advance(Duration::from_millis(80));
            game_tick_system(&mut app.world).unwrap();
        }

        let session = app.world.resource::<Session>();
        assert!(session.pieces_placed() >= 2);
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_filling_rows_with_i_pieces() {
        let mut app = App::default();
        app.world.insert_resource(session_with(&[TetrominoType::I]));

        // Two bars side by side leave columns 8 and 9 for a vertical bar
        let mut script = vec![
            InputEvent::MoveLeft,
            InputEvent::MoveLeft,
            InputEvent::MoveLeft,
            InputEvent::HardDrop,
            InputEvent::MoveRight,
            InputEvent::HardDrop,
        ];
        for _ in 0..3 {
            script.extend_from_slice(&[
                InputEvent::MoveLeft,
                InputEvent::MoveLeft,
                InputEvent::MoveLeft,
                InputEvent::HardDrop,
                InputEvent::MoveRight,
                InputEvent::HardDrop,
            ]);
        }
        for event in script {
            app.push_input(event);
        }
        input_system(&mut app.world).unwrap();

        let session = app.world.resource::<Session>();
        assert_eq!(session.board().occupied_count(), 8 * 4);
        for row in 16..20 {
            let filled = (0..BOARD_WIDTH as i32)
                .filter(|&x| {
                    session
                        .board()
                        .is_occupied(crate::components::Cell::new(x, row))
                })
                .count();
            assert_eq!(filled, 8);
        }

        let mut session = app.world.resource_mut::<Session>();
        session.handle(InputEvent::SoftDrop).unwrap();
        session.handle(InputEvent::Rotate).unwrap();
        for _ in 0..3 {
            session.handle(InputEvent::MoveRight).unwrap();
        }
        session.handle(InputEvent::HardDrop).unwrap();
        session.handle(InputEvent::SoftDrop).unwrap();
        session.handle(InputEvent::Rotate).unwrap();
        for _ in 0..4 {
            session.handle(InputEvent::MoveRight).unwrap();
        }
        session.handle(InputEvent::HardDrop).unwrap();

        assert_eq!(session.lines_cleared(), 4);
        assert_eq!(session.score(), 800);
        assert_eq!(session.board().occupied_count(), 0);
    }
}
