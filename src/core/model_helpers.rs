use crate::core::{Cell, Direction, Environment, Movable, Position};

impl Cell {
    /// Decompose into (environment, movable). The "on goal" variants split
    /// into Goal plus their occupant; bare Player/Block sit on Empty.
    pub fn split(self) -> (Environment, Option<Movable>) {
        match self {
            Cell::Wall => (Environment::Wall, None),
            Cell::Empty => (Environment::Empty, None),
            Cell::Goal => (Environment::Goal, None),
            Cell::Player => (Environment::Empty, Some(Movable::Player)),
            Cell::PlayerOnGoal => (Environment::Goal, Some(Movable::Player)),
            Cell::Block => (Environment::Empty, Some(Movable::Block)),
            Cell::BlockOnGoal => (Environment::Goal, Some(Movable::Block)),
        }
    }

    pub fn environment(self) -> Environment {
        self.split().0
    }

    pub fn movable(self) -> Option<Movable> {
        self.split().1
    }

    /// A movable can step into this cell.
    pub fn is_clear(self) -> bool {
        matches!(self, Cell::Empty | Cell::Goal)
    }

    pub fn has_block(self) -> bool {
        matches!(self, Cell::Block | Cell::BlockOnGoal)
    }

    pub fn from_code(code: char) -> Option<Cell> {
        match code {
            '#' => Some(Cell::Wall),
            '-' => Some(Cell::Empty),
            '@' => Some(Cell::Player),
            '.' => Some(Cell::Goal),
            '$' => Some(Cell::Block),
            '*' => Some(Cell::BlockOnGoal),
            '+' => Some(Cell::PlayerOnGoal),
            _ => None,
        }
    }

    pub fn to_code(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => '-',
            Cell::Player => '@',
            Cell::Goal => '.',
            Cell::Block => '$',
            Cell::BlockOnGoal => '*',
            Cell::PlayerOnGoal => '+',
        }
    }
}

impl Environment {
    /// Compose this terrain with a movable. Placing a movable on a wall is
    /// a caller error; every call site checks `is_clear` first.
    pub fn with(self, movable: Option<Movable>) -> Cell {
        debug_assert!(
            self != Environment::Wall || movable.is_none(),
            "a wall cell cannot hold a movable"
        );
        match (self, movable) {
            (Environment::Wall, _) => Cell::Wall,
            (Environment::Empty, None) => Cell::Empty,
            (Environment::Empty, Some(Movable::Player)) => Cell::Player,
            (Environment::Empty, Some(Movable::Block)) => Cell::Block,
            (Environment::Goal, None) => Cell::Goal,
            (Environment::Goal, Some(Movable::Player)) => Cell::PlayerOnGoal,
            (Environment::Goal, Some(Movable::Block)) => Cell::BlockOnGoal,
        }
    }
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Neighbour one step away, or None when the step would leave the
    /// non-negative coordinate space. Grid-extent bounds are the caller's
    /// to check.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { row, col } = self;
        let stepped = match direction {
            Direction::Up => Position {
                row: row.checked_sub(1)?,
                col,
            },
            Direction::Down => Position { row: row + 1, col },
            Direction::Left => Position {
                row,
                col: col.checked_sub(1)?,
            },
            Direction::Right => Position { row, col: col + 1 },
        };
        Some(stepped)
    }
}
