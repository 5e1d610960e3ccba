mod game;
mod model_helpers;
mod models;
mod reachability;

pub use game::Game;
pub use models::{
    Cell, Direction, Environment, FormatError, GameError, Movable, MoveRecord, Position,
    SavedState, UserAction,
};
pub use reachability::ReachabilityCheck;
