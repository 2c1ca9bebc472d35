//! Game state and turn sequencing

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::InvalidMovementError;
use crate::game_over::{self, Sweep};
use crate::movement::{self, MoveOutcome};
use crate::side::{Side, Winner};

/// Everything that happened during one call to [`Game::play`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub outcome: MoveOutcome,
    /// Set when this move ended the game
    pub sweep: Option<Sweep>,
}

/// A single Kalaha game (mutated in place by [`Game::play`])
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_side: Side,
    ended: bool,
}

impl Game {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Fresh table, SOUTH to move
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.pit_count, config.initial_stones),
            current_side: Side::South,
            ended: false,
        }
    }

    /// Rebuild a game from stored state.
    ///
    /// A running game whose side to move has no stones left is finished on
    /// the spot, sweeping the opponent's pits as a move would.
    pub fn restore(mut board: Board, current_side: Side, ended: bool) -> Self {
        let ended = ended || game_over::check_for_game_over(&mut board, current_side).is_some();
        Self {
            board,
            current_side,
            ended,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Final result; `None` while the game is running
    pub fn winner(&self) -> Option<Winner> {
        self.ended.then(|| self.standing())
    }

    /// Who would win if the game stopped now
    pub fn standing(&self) -> Winner {
        Winner::from_stores(self.board.kalaha(Side::South), self.board.kalaha(Side::North))
    }

    /// Pits the side to move may play
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.ended {
            return vec![];
        }
        self.board
            .pits(self.current_side)
            .iter()
            .enumerate()
            .filter(|&(_, &stones)| stones > 0)
            .map(|(pit, _)| pit)
            .collect()
    }

    // ========================================================================
    // PLAY
    // ========================================================================

    /// Play `pit` for the side to move.
    ///
    /// Sows, resolves capture or extra turn, hands the turn over and then
    /// checks whether the side now to move is out of stones.
    pub fn play(&mut self, pit: usize) -> Result<Turn, InvalidMovementError> {
        if self.ended {
            return Err(InvalidMovementError::GameEnded);
        }

        let outcome = movement::apply_move(&mut self.board, pit, self.current_side)?;
        self.current_side = outcome.next_side;

        let sweep = game_over::check_for_game_over(&mut self.board, self.current_side);
        if sweep.is_some() {
            self.ended = true;
            tracing::debug!(winner = %self.standing(), "game ended");
        }

        Ok(Turn { outcome, sweep })
    }

    /// Successor state after playing `pit`, leaving `self` untouched
    pub fn apply_move(&self, pit: usize) -> Result<Self, InvalidMovementError> {
        let mut next = self.clone();
        next.play(pit)?;
        Ok(next)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
