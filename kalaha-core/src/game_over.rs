//! End of game detection and the final sweep

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::side::Side;

/// Stones moved from a side's pits into its own kalaha at game end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweep {
    pub side: Side,
    pub stones: u32,
}

/// A game is over when the side about to move has nothing to sow
pub fn is_game_over(board: &Board, side_to_move: Side) -> bool {
    board.pits(side_to_move).iter().all(|&stones| stones == 0)
}

/// If `side_to_move` is stuck, the opponent banks every stone left on its
/// side. Returns the sweep when the game ended, `None` otherwise.
pub fn check_for_game_over(board: &mut Board, side_to_move: Side) -> Option<Sweep> {
    if !is_game_over(board, side_to_move) {
        return None;
    }

    let opponent = side_to_move.opposite();
    let stones = board.sweep_pits(opponent);
    board.add_stones_to_kalaha(opponent, stones);

    tracing::debug!(side = %opponent, stones, "game over, remaining stones swept");

    Some(Sweep {
        side: opponent,
        stones,
    })
}
