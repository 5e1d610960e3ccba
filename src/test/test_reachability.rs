mod test {
    use crate::core::{GameError, Position, ReachabilityCheck};

    /// Build the validator input the way an editor would: walls are
    /// impassable, everything else is walkable, '@' marks the player.
    fn editor_grid(level: &str) -> (Vec<Vec<bool>>, Position) {
        let mut player = Position::new(0, 0);
        let passable = level
            .split(',')
            .enumerate()
            .map(|(r, row)| {
                row.chars()
                    .enumerate()
                    .map(|(c, code)| {
                        if code == '@' {
                            player = Position::new(r, c);
                        }
                        code != '#'
                    })
                    .collect()
            })
            .collect();
        (passable, player)
    }

    fn enclosed(level: &str) -> bool {
        let (passable, player) = editor_grid(level);
        ReachabilityCheck::new(passable, player)
            .expect("player inside grid")
            .player_enclosed()
    }

    #[test]
    fn a_full_wall_ring_encloses_the_player() {
        assert!(enclosed("#####,#@--#,#--.#,#####"));
    }

    #[test]
    fn a_gap_in_the_ring_leaks() {
        assert!(!enclosed("#####,#@--#,#----,#####"));
    }

    #[test]
    fn a_gap_the_player_cannot_reach_still_encloses() {
        // The opening at the top sits behind a solid inner wall.
        assert!(enclosed("##-####,##-####,#######,##-@-##,##---##,#######"));
    }

    #[test]
    fn a_player_on_the_boundary_is_not_enclosed() {
        assert!(!enclosed("@--,---,---"));
    }

    #[test]
    fn a_diagonal_gap_counts_as_a_leak() {
        // No cardinal path exists; only the king-move step through the
        // diagonal chain reaches the edge.
        assert!(!enclosed("#####,#@###,##-##,###-#"));
    }

    #[test]
    fn a_sealed_diagonal_pocket_stays_enclosed() {
        assert!(enclosed("#####,#@###,##-##,#####"));
    }

    #[test]
    fn a_one_cell_grid_is_not_enclosed() {
        assert!(!enclosed("@"));
    }

    #[test]
    fn walls_in_every_interior_cell_do_not_stop_the_scan() {
        // Player boxed in on all eight sides: the queue drains after the
        // single seed cell.
        assert!(enclosed("#####,##@##,#####"));
    }

    #[test]
    fn a_start_outside_the_grid_is_rejected() {
        let (passable, _) = editor_grid("###,#-#,###");
        let err = ReachabilityCheck::new(passable, Position::new(5, 1)).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { .. }));
    }
}
