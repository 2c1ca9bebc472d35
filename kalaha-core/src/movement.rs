//! Movement rules: sowing, capture and extra turn
//!
//! A move takes every stone from one of the mover's pits and sows them one
//! per stop, counter-clockwise: the mover's remaining pits, the mover's
//! kalaha, the opponent's pits, then back to the mover's first pit. The
//! opponent's kalaha is never sown into.
//!
//! Once the last stone is down:
//! - in the mover's kalaha: the mover plays again
//! - in a mover's pit that was empty: that stone and the facing pit are
//!   captured into the mover's kalaha, turn passes
//! - anywhere else: turn passes

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::InvalidMovementError;
use crate::side::Side;

// ============================================================================
// TYPES
// ============================================================================

/// Where the last stone of a move came to rest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    Pit { side: Side, index: usize },
    Kalaha(Side),
}

/// Stones banked by a capture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Pit on the mover's side where the last stone landed
    pub pit: usize,
    /// Facing pit that was robbed
    pub opposite_pit: usize,
    /// Total moved into the kalaha (the landing stone included)
    pub stones: u32,
}

/// Result of one accepted move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub landing: Landing,
    pub capture: Option<Capture>,
    /// Side to move after this one
    pub next_side: Side,
}

impl MoveOutcome {
    pub fn is_extra_turn(&self) -> bool {
        matches!(self.landing, Landing::Kalaha(_))
    }
}

// ============================================================================
// MOVE
// ============================================================================

/// Play `pit` for `side`: sow, apply capture/extra-turn, report the result.
///
/// The board is left untouched when the move is rejected.
pub fn apply_move(
    board: &mut Board,
    pit: usize,
    side: Side,
) -> Result<MoveOutcome, InvalidMovementError> {
    let landing = sow(board, pit, side)?;

    let outcome = match landing {
        Landing::Kalaha(_) => {
            tracing::debug!(%side, "last stone in own kalaha, extra turn");
            MoveOutcome {
                landing,
                capture: None,
                next_side: side,
            }
        }
        Landing::Pit { side: landed, index }
            if landed == side && board.pits(side)[index] == 1 =>
        {
            let capture = capture(board, side, index);
            tracing::debug!(%side, pit = index, stones = capture.stones, "capture");
            MoveOutcome {
                landing,
                capture: Some(capture),
                next_side: side.opposite(),
            }
        }
        Landing::Pit { .. } => MoveOutcome {
            landing,
            capture: None,
            next_side: side.opposite(),
        },
    };

    Ok(outcome)
}

/// Validate and distribute the stones of `pit`, returning where the last
/// one landed. No capture or turn logic is applied.
pub fn sow(board: &mut Board, pit: usize, side: Side) -> Result<Landing, InvalidMovementError> {
    validate(board, pit, side)?;

    let pit_count = board.pit_count();
    let mut held = board.take_pit(side, pit);
    let mut current_side = side;
    let mut slot = pit + 1;

    // slot == pit_count addresses the kalaha of current_side
    loop {
        if slot == pit_count {
            if current_side == side {
                board.add_stones_to_kalaha(side, 1);
                held -= 1;
                if held == 0 {
                    return Ok(Landing::Kalaha(side));
                }
            }
            current_side = current_side.opposite();
            slot = 0;
            continue;
        }

        board.pits_mut(current_side)[slot] += 1;
        held -= 1;
        if held == 0 {
            return Ok(Landing::Pit {
                side: current_side,
                index: slot,
            });
        }
        slot += 1;
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn validate(board: &Board, pit: usize, side: Side) -> Result<(), InvalidMovementError> {
    let pit_count = board.pit_count();
    if pit >= pit_count {
        return Err(InvalidMovementError::PitOutOfRange { pit, pit_count });
    }
    if board.pits(side)[pit] == 0 {
        return Err(InvalidMovementError::EmptyPit { pit });
    }
    Ok(())
}

/// Move the landing stone and the facing pit into the mover's kalaha
fn capture(board: &mut Board, side: Side, pit: usize) -> Capture {
    let opposite_pit = board.opposite_index(pit);
    let robbed = board.take_pit(side.opposite(), opposite_pit);
    let own = board.take_pit(side, pit);
    let stones = robbed + own;
    board.add_stones_to_kalaha(side, stones);

    Capture {
        pit,
        opposite_pit,
        stones,
    }
}
