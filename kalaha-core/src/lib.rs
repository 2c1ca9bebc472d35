//! Kalaha Core - Game engine
//!
//! This crate provides the rules of Kalaha (six-pit Mancala):
//! - Board with pit rows and kalahas for SOUTH and NORTH
//! - Movement engine: sowing, capture, extra turn
//! - Game-over detection and the final sweep
//! - Game orchestration and configuration

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod game_over;
pub mod movement;
pub mod side;

// Re-exports for convenient access
pub use board::Board;
pub use config::{GameConfig, DEFAULT_PITS, DEFAULT_STONES};
pub use error::{BoardError, ConfigError, InvalidMovementError};
pub use game::{Game, Turn};
pub use game_over::{check_for_game_over, is_game_over, Sweep};
pub use movement::{apply_move, sow, Capture, Landing, MoveOutcome};
pub use side::{Side, Winner};
