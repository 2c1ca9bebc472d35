//! Play command - hot-seat game on the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: start_game(), run_session(), save_game()
//! - Level 3: read_command(), apply_command()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use kalaha_service::{GameId, GameService, GameView};

use crate::config_cmd::TableArgs;
use crate::render::{render_board, render_status};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Name of the SOUTH player (moves first)
    #[arg(long, default_value = "south")]
    pub south: String,

    /// Name of the NORTH player
    #[arg(long, default_value = "north")]
    pub north: String,

    /// Continue a game saved with --save
    #[arg(long, value_name = "FILE")]
    pub resume: Option<PathBuf>,

    /// Write the game to this file when the session ends
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    #[command(flatten)]
    pub table: TableArgs,
}

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Zero-based pit index
    Pit(usize),
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Create or resume the game
/// 2. Alternate turns until the game ends or a player quits
/// 3. Optionally save the final state
pub fn run(args: PlayArgs) -> Result<()> {
    let service = GameService::new(args.table.resolve()?);
    let game_id = start_game(&service, &args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let view = run_session(&service, game_id, stdin.lock(), stdout.lock())?;

    if let Some(path) = &args.save {
        save_game(&view, path)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn start_game(service: &GameService, args: &PlayArgs) -> Result<GameId> {
    let view = match &args.resume {
        Some(path) => {
            let view = load_game(path)?;
            service
                .restore(&view)
                .with_context(|| format!("Saved game is not playable: {}", path.display()))?
        }
        None => service.create(&args.south, &args.north),
    };

    tracing::info!(
        "Starting game {}: {} (SOUTH) vs {} (NORTH)",
        view.id,
        view.southern_player,
        view.northern_player
    );

    Ok(view.id)
}

/// Prompt for moves until the game ends, input runs out or a player quits.
/// Returns the last state of the game.
fn run_session<R: BufRead, W: Write>(
    service: &GameService,
    game_id: GameId,
    mut input: R,
    mut output: W,
) -> Result<GameView> {
    let mut view = service.get(game_id)?;

    loop {
        write!(output, "\n{}", render_board(&view))?;
        writeln!(output, "{}", render_status(&view))?;
        if view.ended {
            return Ok(view);
        }

        let pit_count = view.southern_pits.len();
        write!(output, "{}, choose a pit [1-{}] or q to quit: ", view.player_to_move(), pit_count)?;
        output.flush()?;

        let command = match read_command(&mut input, pit_count)? {
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                writeln!(output, "{}", message)?;
                continue;
            }
            None => return Ok(view),
        };

        match apply_command(service, &view, command)? {
            Some(Ok(next)) => view = next,
            Some(Err(message)) => writeln!(output, "That move is not allowed: {}", message)?,
            None => return Ok(view),
        }
    }
}

fn save_game(view: &GameView, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(view)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to save game: {}", path.display()))?;
    tracing::info!("Saved game to {}", path.display());
    Ok(())
}

fn load_game(path: &Path) -> Result<GameView> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read saved game: {}", path.display()))?;
    let view = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse saved game: {}", path.display()))?;
    Ok(view)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// `None` at end of input, `Some(Err)` for unreadable lines
fn read_command<R: BufRead>(input: &mut R, pit_count: usize) -> Result<Option<Result<Command, String>>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(parse_command(&line, pit_count)))
}

/// Play the move on behalf of the player to move. Rejected moves come back
/// as a message; `None` means quit.
fn apply_command(
    service: &GameService,
    view: &GameView,
    command: Command,
) -> Result<Option<Result<GameView, String>>> {
    let pit = match command {
        Command::Quit => return Ok(None),
        Command::Pit(pit) => pit,
    };

    match service.make_move(view.id, view.player_to_move(), pit) {
        Ok(next) => Ok(Some(Ok(next))),
        Err(err) if err.is_rejected_move() => Ok(Some(Err(err.to_string()))),
        Err(err) => Err(err.into()),
    }
}

// ============================================================================
// LEVEL 4 - PARSING
// ============================================================================

/// Pits are numbered from 1 for players
fn parse_command(line: &str, pit_count: usize) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=pit_count).contains(&n) => Ok(Command::Pit(n - 1)),
        _ => Err(format!("Enter a pit number from 1 to {}, or q", pit_count)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
