//! The table: pit rows and stores for both sides

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::side::Side;

/// Pit counts and kalahas for SOUTH and NORTH.
///
/// Pits are indexed from each owner's point of view, so pit `i` of one side
/// faces pit `pit_count - 1 - i` of the other. The board holds no rule
/// knowledge; the movement engine mutates it through [`Board::pits_mut`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pits: [Vec<u32>; 2],
    kalahas: [u32; 2],
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Fresh board with `initial_stones` in every pit and empty stores
    pub fn new(pit_count: usize, initial_stones: u32) -> Self {
        Self {
            pits: [vec![initial_stones; pit_count], vec![initial_stones; pit_count]],
            kalahas: [0, 0],
        }
    }

    /// Board from explicit rows, e.g. when restoring a saved game.
    ///
    /// The total stone count must fit in `u32`; sowing conserves it, so no
    /// later addition can overflow.
    pub fn from_parts(
        southern_pits: Vec<u32>,
        northern_pits: Vec<u32>,
        southern_kalaha: u32,
        northern_kalaha: u32,
    ) -> Result<Self, BoardError> {
        if southern_pits.len() != northern_pits.len() {
            return Err(BoardError::PitCountMismatch {
                south: southern_pits.len(),
                north: northern_pits.len(),
            });
        }
        if southern_pits.is_empty() {
            return Err(BoardError::EmptyRows);
        }

        let total = southern_pits
            .iter()
            .chain(&northern_pits)
            .chain([&southern_kalaha, &northern_kalaha])
            .try_fold(0u32, |acc, &stones| acc.checked_add(stones));
        if total.is_none() {
            return Err(BoardError::TooManyStones);
        }

        Ok(Self {
            pits: [southern_pits, northern_pits],
            kalahas: [southern_kalaha, northern_kalaha],
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Pits per side
    pub fn pit_count(&self) -> usize {
        self.pits[0].len()
    }

    pub fn pits(&self, side: Side) -> &[u32] {
        &self.pits[side.index()]
    }

    /// Live handle on a pit row
    pub fn pits_mut(&mut self, side: Side) -> &mut [u32] {
        &mut self.pits[side.index()]
    }

    pub fn kalaha(&self, side: Side) -> u32 {
        self.kalahas[side.index()]
    }

    pub fn add_stones_to_kalaha(&mut self, side: Side, amount: u32) {
        self.kalahas[side.index()] += amount;
    }

    /// Stones still in play on one side
    pub fn stones_in_pits(&self, side: Side) -> u32 {
        self.pits(side).iter().sum()
    }

    /// Every stone on the table, pits and stores
    pub fn total_stones(&self) -> u32 {
        Side::ALL
            .iter()
            .map(|&side| self.stones_in_pits(side) + self.kalaha(side))
            .sum()
    }

    /// Index of the pit facing `index` on the other side
    pub fn opposite_index(&self, index: usize) -> usize {
        self.pit_count() - 1 - index
    }

    // ========================================================================
    // MUTATION HELPERS
    // ========================================================================

    /// Empty a pit and return what it held
    pub fn take_pit(&mut self, side: Side, index: usize) -> u32 {
        std::mem::take(&mut self.pits_mut(side)[index])
    }

    /// Empty every pit of a side and return the total
    pub fn sweep_pits(&mut self, side: Side) -> u32 {
        self.pits_mut(side).iter_mut().map(std::mem::take).sum()
    }
}
