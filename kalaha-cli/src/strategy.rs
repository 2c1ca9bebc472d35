//! Move selection for automated players

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use kalaha_core::Game;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Uniformly random legal pit
    Random,
    /// Leftmost non-empty pit
    First,
    /// Pit that banks the most stones this turn, preferring extra turns
    Greedy,
}

impl Strategy {
    /// Pick a pit for the side to move; `None` once the game is over
    pub fn choose(self, game: &Game, rng: &mut ChaCha8Rng) -> Option<usize> {
        let moves = game.legal_moves();

        match self {
            Strategy::Random => moves.choose(rng).copied(),
            Strategy::First => moves.first().copied(),
            Strategy::Greedy => moves.into_iter().max_by_key(|&pit| greedy_score(game, pit)),
        }
    }
}

/// (stones banked, keeps the turn, prefer leftmost on ties)
fn greedy_score(game: &Game, pit: usize) -> (u32, bool, std::cmp::Reverse<usize>) {
    let side = game.current_side();
    let before = game.board().kalaha(side);

    match game.apply_move(pit) {
        Ok(next) => (
            next.board().kalaha(side) - before,
            !next.is_ended() && next.current_side() == side,
            std::cmp::Reverse(pit),
        ),
        Err(_) => (0, false, std::cmp::Reverse(pit)),
    }
}
