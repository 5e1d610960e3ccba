// Terminal Sokoban on top of the rules engine in core/.
// Modes: interactive (default), resume (reload the last saved state),
// check (run the editor's enclosure validator against the level).
// Tiles: '#' wall, '-' empty, '@' player, '$' block, '.' goal,
// '*' block on goal, '+' player on goal.

mod console_interface;
mod core;
mod models;
mod test;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    cleanup_terminal, handle_input, outcome_of, render_game, setup_terminal,
};
use crate::core::{Cell, Game, ReachabilityCheck, SavedState};
use crate::models::GameRenderState;

const BUILTIN_LEVEL: &str = "########,#-@$--.#,#-$--$-#,#-.#-$-#,#..#---#,########";
const SAVED_STATE_PATH: &str = "exports/saved_state.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let (name, level) = match std::env::args().nth(2) {
        Some(path) => (path.clone(), std::fs::read_to_string(path)?),
        None => ("builtin".to_string(), BUILTIN_LEVEL.to_string()),
    };

    let mut game = Game::load(&name, &level)?;
    log::info!(
        "loaded level {}: {} rows x {} cols",
        game.name(),
        game.rows(),
        game.cols()
    );

    match switch.as_str() {
        "check" => {
            run_check(&game)?;
        }
        "resume" => {
            let state: SavedState =
                serde_json::from_str(&std::fs::read_to_string(SAVED_STATE_PATH)?)?;
            game.load_state(state)?;
            log::info!("resumed at {} moves", game.move_count());
            run_interactive(&mut game)?;
        }
        "interactive" => {
            run_interactive(&mut game)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive', 'resume' or 'check'. Defaulting to interactive",
                switch
            );
            run_interactive(&mut game)?;
        }
    }

    Ok(())
}

/// The level-editor acceptance check: reject any layout where the player
/// can walk (king moves included) to the grid's outer ring.
fn run_check(game: &Game) -> Result<(), Box<dyn std::error::Error>> {
    let mut passable = Vec::with_capacity(game.rows());
    for row in 0..game.rows() {
        let mut cells = Vec::with_capacity(game.cols());
        for col in 0..game.cols() {
            cells.push(game.part_at(row, col)? != Cell::Wall);
        }
        passable.push(cells);
    }

    let checker = ReachabilityCheck::new(passable, game.make_state().player)?;
    if checker.player_enclosed() {
        log::info!("level {} passed the enclosure check", game.name());
        println!("level ok: the player is enclosed by walls");
    } else {
        log::warn!("level {} failed the enclosure check", game.name());
        println!("level invalid: the player can reach the edge of the grid");
    }
    Ok(())
}

fn run_interactive(game: &mut Game) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;

    // Initial render
    let first_render = GameRenderState {
        won: game.is_finished(),
        last_outcome: None,
    };
    render_game(&mut terminal, game, &first_render)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(Action(action)) => {
                let changed = game.apply(action);
                let to_render = GameRenderState {
                    won: game.is_finished(),
                    last_outcome: Some(outcome_of(action, &changed)),
                };
                render_game(&mut terminal, game, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(Save) => {
                save_state(game)?;
                log::info!("state saved to {}", SAVED_STATE_PATH);
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}

fn save_state(game: &Game) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("exports")?;
    let json = serde_json::to_string_pretty(&game.make_state())?;
    std::fs::write(SAVED_STATE_PATH, json)?;
    Ok(())
}
