/// What the last accepted input did to the session, for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Step,
    Push,
    Blocked,
    Undone,
    NothingToUndo,
    Restarted,
}

pub struct GameRenderState {
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
}
