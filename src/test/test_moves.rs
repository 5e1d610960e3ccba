mod test {
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn step_into_empty_reports_both_cells() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        let changed = game.assert_move(Right);

        assert_eq!(changed, vec![Position::new(1, 1), Position::new(1, 2)]);
        game.assert_matches("#####,#-@-#,#--.#,#####");
        assert_eq!(game.game.move_count(), 1);
    }

    #[test]
    fn step_onto_goal_and_off_again_preserves_goal() {
        let mut game = GameTestState::new("#####,#@.-#,#####");

        game.assert_move(Right);
        game.assert_matches("#####,#-+-#,#####");

        game.assert_move(Right);
        game.assert_matches("#####,#-.@#,#####");
    }

    #[test]
    fn push_moves_block_one_cell() {
        let mut game = GameTestState::new("######,#@$--#,######");

        let changed = game.assert_move(Right);

        assert_eq!(
            changed,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3)
            ]
        );
        game.assert_matches("######,#-@$-#,######");
    }

    #[test]
    fn push_onto_goal_makes_block_on_goal_and_wins() {
        let mut game = GameTestState::new("#####,#@$.#,#####");

        assert!(!game.game.is_finished());
        game.assert_move(Right);

        game.assert_matches("#####,#-@*#,#####");
        assert!(game.game.is_finished());
    }

    #[test]
    fn push_block_off_goal_keeps_goal_under_player() {
        let mut game = GameTestState::new("#######,#@*--.#,#######");

        game.assert_move(Right);

        game.assert_matches("#######,#-+$-.#,#######");
        assert!(!game.game.is_finished());
    }

    #[test]
    fn walls_block_steps() {
        let mut game = GameTestState::new("####,#@-#,####");

        game.assert_blocked(Left);
        game.assert_blocked(Up);
        game.assert_blocked(Down);
        game.assert_move(Right);
    }

    #[test]
    fn push_against_wall_is_blocked() {
        let mut game = GameTestState::new("#####,#@$##,#####");

        game.assert_blocked(Right);
    }

    #[test]
    fn push_against_block_is_blocked() {
        let mut game = GameTestState::new("######,#@$$-#,######");

        game.assert_blocked(Right);
    }

    #[test]
    fn push_against_block_on_goal_is_blocked() {
        let mut game = GameTestState::new("######,#@$*-#,######");

        game.assert_blocked(Right);
    }

    #[test]
    fn stepping_off_the_grid_is_blocked() {
        // No wall ring, so the grid edge itself is the only obstacle.
        let mut game = GameTestState::new("@-");

        game.assert_blocked(Left);
        game.assert_blocked(Up);
        game.assert_blocked(Down);
        game.assert_move(Right);
    }

    #[test]
    fn pushing_off_the_grid_is_blocked() {
        let mut game = GameTestState::new("@$");

        game.assert_blocked(Right);
    }

    #[test]
    fn every_legal_move_increments_the_counter_once() {
        let mut game = GameTestState::new("#####,#@--#,#--.#,#####");

        game.assert_moves(&[Right, Down, Left]);

        assert_eq!(game.game.move_count(), 3);
    }
}
