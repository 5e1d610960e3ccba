use crate::core::{
    Cell, Direction, Environment, FormatError, GameError, Movable, MoveRecord, Position,
    SavedState, UserAction,
};

/// One active puzzle session: the mutable grid, the tracked player and
/// block positions, the move counter, and the undo history. The pristine
/// parse of the level is kept alongside so restart and state loading can
/// rebuild without touching the level text again.
#[derive(Debug)]
pub struct Game {
    name: String,
    initial_grid: Vec<Vec<Cell>>,
    initial_player: Position,
    initial_blocks: Vec<Position>,
    grid: Vec<Vec<Cell>>,
    player: Position,
    blocks: Vec<Position>,
    move_count: u32,
    moves_made: Vec<MoveRecord>,
}

impl Game {
    /// Parse and validate a level. Rows are separated by `,` or newlines;
    /// fully empty rows are skipped. Fails without building any state when
    /// the text is malformed.
    pub fn load(name: &str, level: &str) -> Result<Game, FormatError> {
        let (grid, player, blocks) = parse_level(level)?;
        Ok(Game {
            name: name.to_string(),
            initial_grid: grid.clone(),
            initial_player: player,
            initial_blocks: blocks.clone(),
            grid,
            player,
            blocks,
            move_count: 0,
            moves_made: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn part_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// True iff every block rests on a goal.
    pub fn is_finished(&self) -> bool {
        self.blocks
            .iter()
            .all(|p| self.cell(*p) == Cell::BlockOnGoal)
    }

    pub fn apply(&mut self, action: UserAction) -> Vec<Position> {
        match action {
            UserAction::Move(direction) => self.move_player(direction),
            UserAction::Undo => self.undo(),
            UserAction::Restart => {
                self.restart();
                Vec::new()
            }
        }
    }

    /// Attempt a step or push in `direction`. Returns the positions whose
    /// cells changed, in order from the player's start; an empty list means
    /// the move was illegal and nothing changed.
    pub fn move_player(&mut self, direction: Direction) -> Vec<Position> {
        let start = self.player;
        let Some(target) = self.neighbour(start, direction) else {
            return Vec::new();
        };

        if self.cell(target).is_clear() {
            self.relocate(start, target);
            self.player = target;
            self.move_count += 1;
            self.moves_made.push(MoveRecord::step(start, target));
            return vec![start, target];
        }

        if self.cell(target).has_block() {
            let Some(beyond) = self.neighbour(target, direction) else {
                return Vec::new();
            };
            if self.cell(beyond).is_clear() {
                self.relocate(target, beyond);
                self.relocate(start, target);
                self.player = target;
                self.move_block_pos(target, beyond);
                self.move_count += 1;
                self.moves_made.push(MoveRecord::push(start, target, beyond));
                return vec![start, target, beyond];
            }
        }

        Vec::new()
    }

    /// Invert the most recent move. Undoing counts as a move of its own,
    /// so the counter goes up here too. No-op on empty history.
    pub fn undo(&mut self) -> Vec<Position> {
        let Some(last) = self.moves_made.pop() else {
            return Vec::new();
        };
        self.move_count += 1;
        self.relocate(last.player_end, last.player_start);
        self.player = last.player_start;
        if let Some(block_end) = last.block_end {
            self.relocate(block_end, last.player_end);
            self.move_block_pos(block_end, last.player_end);
        }
        last.positions()
    }

    /// Back to the level as loaded: counter zeroed, history dropped.
    pub fn restart(&mut self) {
        self.grid = self.initial_grid.clone();
        self.player = self.initial_player;
        self.blocks = self.initial_blocks.clone();
        self.move_count = 0;
        self.moves_made.clear();
    }

    pub fn make_state(&self) -> SavedState {
        SavedState {
            moves: self.move_count,
            player: self.player,
            blocks: self.blocks.clone(),
        }
    }

    /// Resume from a snapshot: the environment layer comes from the level
    /// loaded at construction, the movables from the snapshot. The session
    /// is replaced wholesale, including the undo history. Nothing changes
    /// when the snapshot does not fit the grid.
    pub fn load_state(&mut self, state: SavedState) -> Result<(), GameError> {
        let rows = self.rows();
        let cols = self.cols();
        let mut grid: Vec<Vec<Cell>> = self
            .initial_grid
            .iter()
            .map(|row| row.iter().map(|c| c.environment().with(None)).collect())
            .collect();

        Self::place_movable(&mut grid, state.player, Movable::Player, rows, cols)?;
        for &block in &state.blocks {
            Self::place_movable(&mut grid, block, Movable::Block, rows, cols)?;
        }

        self.grid = grid;
        self.player = state.player;
        self.blocks = state.blocks;
        self.move_count = state.moves;
        self.moves_made.clear();
        Ok(())
    }

    fn place_movable(
        grid: &mut [Vec<Cell>],
        pos: Position,
        movable: Movable,
        rows: usize,
        cols: usize,
    ) -> Result<(), GameError> {
        let cell = grid
            .get(pos.row)
            .and_then(|r| r.get(pos.col))
            .copied()
            .ok_or(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows,
                cols,
            })?;
        if cell.environment() == Environment::Wall {
            return Err(GameError::StateConflict(pos));
        }
        grid[pos.row][pos.col] = cell.environment().with(Some(movable));
        Ok(())
    }

    fn cell(&self, pos: Position) -> Cell {
        self.grid[pos.row][pos.col]
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    fn neighbour(&self, from: Position, direction: Direction) -> Option<Position> {
        from.step(direction).filter(|p| self.in_bounds(*p))
    }

    /// Carry the movable at `from` over to `to`, leaving both cells'
    /// environments untouched.
    fn relocate(&mut self, from: Position, to: Position) {
        let (from_env, movable) = self.cell(from).split();
        self.grid[from.row][from.col] = from_env.with(None);
        let (to_env, _) = self.cell(to).split();
        self.grid[to.row][to.col] = to_env.with(movable);
    }

    fn move_block_pos(&mut self, start: Position, end: Position) {
        if let Some(entry) = self.blocks.iter_mut().find(|b| **b == start) {
            *entry = end;
        }
    }
}

fn parse_level(level: &str) -> Result<(Vec<Vec<Cell>>, Position, Vec<Position>), FormatError> {
    let rows: Vec<&str> = level
        .split([',', '\n'])
        .map(|r| r.trim_end_matches('\r'))
        .filter(|r| !r.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(FormatError::EmptyLevel);
    }

    let expected = rows[0].chars().count();
    let mut grid = Vec::with_capacity(rows.len());
    let mut player = None;
    let mut blocks = Vec::new();

    for (r, line) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(expected);
        for (c, code) in line.chars().enumerate() {
            let cell = Cell::from_code(code).ok_or(FormatError::UnknownCode {
                code,
                row: r,
                col: c,
            })?;
            match cell.movable() {
                Some(Movable::Player) => {
                    if player.is_some() {
                        return Err(FormatError::ExtraPlayer { row: r, col: c });
                    }
                    player = Some(Position::new(r, c));
                }
                Some(Movable::Block) => blocks.push(Position::new(r, c)),
                None => {}
            }
            cells.push(cell);
        }
        if cells.len() != expected {
            return Err(FormatError::RaggedRow {
                row: r,
                len: cells.len(),
                expected,
            });
        }
        grid.push(cells);
    }

    let player = player.ok_or(FormatError::NoPlayer)?;
    Ok((grid, player, blocks))
}
