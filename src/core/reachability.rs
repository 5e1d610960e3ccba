use std::collections::VecDeque;

use crate::core::{GameError, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Square {
    Wall,
    Open,
    Visited,
}

/// Flood-fill check a level editor runs before accepting a layout: is the
/// player sealed in by walls, or can they walk off the edge of the grid?
/// One checker serves one call; it owns its working grid and queue and is
/// consumed by the check.
#[derive(Debug)]
pub struct ReachabilityCheck {
    squares: Vec<Vec<Square>>,
    start: Position,
}

impl ReachabilityCheck {
    /// `passable[r][c]` is true where the player can stand (anything that
    /// is not a wall). Fails when the start position is off the grid.
    pub fn new(passable: Vec<Vec<bool>>, start: Position) -> Result<ReachabilityCheck, GameError> {
        let rows = passable.len();
        let cols = passable.first().map_or(0, Vec::len);
        debug_assert!(passable.iter().all(|r| r.len() == cols), "ragged grid");
        if start.row >= rows || start.col >= cols {
            return Err(GameError::OutOfBounds {
                row: start.row,
                col: start.col,
                rows,
                cols,
            });
        }
        let squares = passable
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|open| if open { Square::Open } else { Square::Wall })
                    .collect()
            })
            .collect();
        Ok(ReachabilityCheck { squares, start })
    }

    /// Breadth-first search from the start over king-move (8-directional)
    /// adjacency, so a diagonal gap in a wall counts as a leak. Returns
    /// true when the search exhausts every reachable square without
    /// touching the grid's outer ring; false as soon as it does.
    pub fn player_enclosed(mut self) -> bool {
        let mut queue = VecDeque::new();
        queue.push_back(self.start);
        self.mark_visited(self.start);

        while let Some(current) = queue.pop_front() {
            if self.next_to_edge(current) {
                return false;
            }
            // current is interior here, so the 3x3 scan stays in range.
            for row in current.row - 1..=current.row + 1 {
                for col in current.col - 1..=current.col + 1 {
                    if self.squares[row][col] == Square::Open {
                        let neighbour = Position::new(row, col);
                        self.mark_visited(neighbour);
                        queue.push_back(neighbour);
                    }
                }
            }
        }
        true
    }

    fn mark_visited(&mut self, pos: Position) {
        self.squares[pos.row][pos.col] = Square::Visited;
    }

    fn next_to_edge(&self, pos: Position) -> bool {
        pos.row == 0
            || pos.col == 0
            || pos.row + 1 == self.squares.len()
            || pos.col + 1 == self.squares[0].len()
    }
}
