//! Simulate command - automated games between two strategies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use kalaha_core::{Game, GameConfig, Side, Winner};

use crate::config_cmd::TableArgs;
use crate::strategy::Strategy;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Strategy for SOUTH (moves first)
    #[arg(long, value_enum, default_value = "random")]
    pub south: Strategy,

    /// Strategy for NORTH
    #[arg(long, value_enum, default_value = "random")]
    pub north: Strategy,

    /// Abandon a game after this many moves
    #[arg(long, default_value = "1000")]
    pub max_moves: u32,

    /// Run games on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    /// `None` when the move limit was hit first
    winner: Option<Winner>,
    moves: u32,
    captures: u32,
    extra_turns: u32,
    south_kalaha: u32,
    north_kalaha: u32,
}

/// Aggregated results
#[derive(Clone, Debug, Serialize)]
struct SimulationResults {
    total_games: usize,
    south_wins: usize,
    north_wins: usize,
    ties: usize,
    unfinished: usize,
    avg_moves: f32,
    avg_captures: f32,
    avg_extra_turns: f32,
    games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Resolve the table configuration
/// 2. Play all games
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let config = args.table.resolve()?;
    let base_seed = seed.unwrap_or_else(rand::random);

    tracing::info!(
        "Starting simulation: {:?} vs {:?} ({} games, {} pits x {} stones, seed={})",
        args.south,
        args.north,
        args.games,
        config.pit_count,
        config.initial_stones,
        base_seed
    );

    let games = play_games(&config, &args, base_seed);
    let results = compute_statistics(games);

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play every game, one seed per game so results do not depend on scheduling
fn play_games(config: &GameConfig, args: &SimulateArgs, base_seed: u64) -> Vec<GameRecord> {
    let progress = create_progress_bar(args.games as u64, args.json);

    let play = |game_index: usize| {
        let seed = base_seed.wrapping_add(game_index as u64);
        let record = play_single_game(
            config,
            args.south,
            args.north,
            game_index + 1,
            args.max_moves,
            seed,
        );
        progress.inc(1);
        record
    };

    let games: Vec<GameRecord> = if args.parallel {
        (0..args.games).into_par_iter().map(play).collect()
    } else {
        (0..args.games).map(play).collect()
    };

    progress.finish_and_clear();
    games
}

fn report_results(results: &SimulationResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_single_game(
    config: &GameConfig,
    south: Strategy,
    north: Strategy,
    game_number: usize,
    max_moves: u32,
    seed: u64,
) -> GameRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::new(config);
    let mut moves = 0;
    let mut captures = 0;
    let mut extra_turns = 0;

    while !game.is_ended() && moves < max_moves {
        let strategy = match game.current_side() {
            Side::South => south,
            Side::North => north,
        };
        let Some(pit) = strategy.choose(&game, &mut rng) else {
            break;
        };

        match game.play(pit) {
            Ok(turn) => {
                moves += 1;
                if turn.outcome.capture.is_some() {
                    captures += 1;
                }
                if turn.outcome.is_extra_turn() {
                    extra_turns += 1;
                }
            }
            Err(err) => {
                tracing::warn!("Game {}: strategy chose an invalid move: {}", game_number, err);
                break;
            }
        }
    }

    tracing::debug!(
        "Game {}: {:?} after {} moves",
        game_number,
        game.winner(),
        moves
    );

    GameRecord {
        game_number,
        winner: game.winner(),
        moves,
        captures,
        extra_turns,
        south_kalaha: game.board().kalaha(Side::South),
        north_kalaha: game.board().kalaha(Side::North),
    }
}

fn compute_statistics(games: Vec<GameRecord>) -> SimulationResults {
    let count = |winner: Option<Winner>| games.iter().filter(|g| g.winner == winner).count();
    let average = |f: fn(&GameRecord) -> u32| {
        if games.is_empty() {
            0.0
        } else {
            games.iter().map(|g| u64::from(f(g))).sum::<u64>() as f32 / games.len() as f32
        }
    };

    SimulationResults {
        total_games: games.len(),
        south_wins: count(Some(Winner::South)),
        north_wins: count(Some(Winner::North)),
        ties: count(Some(Winner::Tied)),
        unfinished: count(None),
        avg_moves: average(|g| g.moves),
        avg_captures: average(|g| g.captures),
        avg_extra_turns: average(|g| g.extra_turns),
        games,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_progress_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})") {
        progress.set_style(style);
    }
    progress
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(results: &SimulationResults) {
    let total = results.total_games;

    println!("\n=== Simulation Results ===");
    println!("Total games:  {}", total);
    println!(
        "South wins:   {} ({:.1}%)",
        results.south_wins,
        percent(results.south_wins, total)
    );
    println!(
        "North wins:   {} ({:.1}%)",
        results.north_wins,
        percent(results.north_wins, total)
    );
    println!("Ties:         {} ({:.1}%)", results.ties, percent(results.ties, total));
    if results.unfinished > 0 {
        println!("Unfinished:   {}", results.unfinished);
    }
    println!("Avg moves:    {:.1}", results.avg_moves);
    println!("Avg captures: {:.1}", results.avg_captures);
    println!("Avg extra:    {:.1}", results.avg_extra_turns);
}

// ============================================================================
// TESTS
// ============================================================================
