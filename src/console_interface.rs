use crate::core::{Direction, Game, GameError, Position, UserAction};
use crate::models::{GameRenderState, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &Game,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let game_text = render_game_to_string(game)?;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_paragraph = Paragraph::new(game_text.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} | moves: {}", game.name(), game.move_count())),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "You win! Press any key to quit."
        } else {
            "Arrows/WASD move, U undo, R restart, P save, Q quit"
        };

        let instructions = match state.last_outcome {
            Some(outcome) => format!("{} | Last: {:?}", instructions, outcome),
            None => instructions.to_string(),
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Draw the whole grid back through the read-only query surface, using the
/// same one-character codes the level format uses.
pub fn render_game_to_string(game: &Game) -> Result<String, GameError> {
    let mut result = String::new();
    for row in 0..game.rows() {
        for col in 0..game.cols() {
            result.push(game.part_at(row, col)?.to_code());
        }
        result.push('\n');
    }
    Ok(result)
}

pub enum ConsoleInput {
    Action(UserAction),
    Save,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Action(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Action(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Action(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Action(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('u') | KeyCode::Char('U') => {
                    ConsoleInput::Action(UserAction::Undo)
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    ConsoleInput::Action(UserAction::Restart)
                }
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::Save,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Classify an `apply` result for the status line.
pub fn outcome_of(action: UserAction, changed: &[Position]) -> MoveOutcome {
    match action {
        UserAction::Move(_) => match changed.len() {
            0 => MoveOutcome::Blocked,
            2 => MoveOutcome::Step,
            _ => MoveOutcome::Push,
        },
        UserAction::Undo => {
            if changed.is_empty() {
                MoveOutcome::NothingToUndo
            } else {
                MoveOutcome::Undone
            }
        }
        UserAction::Restart => MoveOutcome::Restarted,
    }
}
