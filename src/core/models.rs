use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One grid square. The seven values are the product of an environment
/// facet {Wall, Empty, Goal} and a movable facet {none, Player, Block},
/// with Wall never holding a movable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Empty,
    Goal,
    Player,
    PlayerOnGoal,
    Block,
    BlockOnGoal,
}

/// The terrain facet of a cell, independent of whatever sits on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Wall,
    Empty,
    Goal,
}

/// The occupant facet of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movable {
    Player,
    Block,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Restart,
}

/// One applied move, recorded with exactly enough to invert it.
/// `block_end` is present iff the move pushed a block; the pushed block
/// travelled from `player_end` to `block_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub player_start: Position,
    pub player_end: Position,
    pub block_end: Option<Position>,
}

impl MoveRecord {
    pub fn step(player_start: Position, player_end: Position) -> MoveRecord {
        MoveRecord {
            player_start,
            player_end,
            block_end: None,
        }
    }

    pub fn push(player_start: Position, player_end: Position, block_end: Position) -> MoveRecord {
        MoveRecord {
            player_start,
            player_end,
            block_end: Some(block_end),
        }
    }

    /// Positions in the order the forward move reported them.
    pub fn positions(&self) -> Vec<Position> {
        match self.block_end {
            Some(block_end) => vec![self.player_start, self.player_end, block_end],
            None => vec![self.player_start, self.player_end],
        }
    }
}

/// Serializable snapshot of a session. The environment layer is not part
/// of it; a loader re-derives that from the original level text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub moves: u32,
    pub player: Position,
    pub blocks: Vec<Position>,
}

/// Malformed level text. Rejected before any grid state is built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("level contains no rows")]
    EmptyLevel,
    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized cell code {code:?} at row {row}, column {col}")]
    UnknownCode { code: char, row: usize, col: usize },
    #[error("level contains no player")]
    NoPlayer,
    #[error("level contains a second player at row {row}, column {col}")]
    ExtraPlayer { row: usize, col: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("saved state places a movable inside the wall at ({}, {})", .0.row, .0.col)]
    StateConflict(Position),
}
