mod test {
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn undo_restores_a_step() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        game.assert_move(Right);
        let changed = game.game.undo();

        assert_eq!(changed, vec![Position::new(1, 1), Position::new(1, 2)]);
        game.assert_matches("#####,#@--#,#--.#,#####");
    }

    #[test]
    fn undo_restores_a_push_including_the_block() {
        let mut game = GameTestState::new("#####,#@$.#,#####");

        game.assert_move(Right);
        assert!(game.game.is_finished());

        let changed = game.game.undo();

        assert_eq!(
            changed,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3)
            ]
        );
        game.assert_matches("#####,#@$.#,#####");
        assert!(!game.game.is_finished());
    }

    #[test]
    fn undo_restores_goal_environments() {
        let mut game = GameTestState::new("#######,#@*--.#,#######");

        game.assert_move(Right);
        game.game.undo();

        game.assert_matches("#######,#@*--.#,#######");
    }

    // Undoing deliberately counts as a move; scoring depends on it.
    #[test]
    fn undo_increments_the_move_counter() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        game.assert_move(Right);
        game.game.undo();

        assert_eq!(game.game.move_count(), 2);
    }

    #[test]
    fn undo_with_no_history_is_a_noop() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        let changed = game.game.undo();

        assert!(changed.is_empty());
        assert_eq!(game.game.move_count(), 0);
        game.assert_matches("#####,#@--#,#--.#,#####");
    }

    #[test]
    fn undos_unwind_in_reverse_order() {
        let mut game = GameTestState::new("######,#@$--#,#--.-#,######");

        game.assert_moves(&[Right, Down, Left]);
        game.game.undo();
        game.game.undo();
        game.game.undo();

        game.assert_matches("######,#@$--#,#--.-#,######");
    }

    #[test]
    fn restart_drops_the_history() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        game.assert_moves(&[Right, Down]);
        game.game.restart();

        assert_eq!(game.game.move_count(), 0);
        assert!(game.game.undo().is_empty());
        game.assert_matches("#####,#@--#,#--.#,#####");
    }
}
