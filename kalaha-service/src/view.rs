//! Flattened game representation
//!
//! One row per game: players, side to move, both pit rows, both kalahas,
//! the ended flag and (once ended) the winner.

use serde::{Deserialize, Serialize};

use kalaha_core::{Board, BoardError, Game, Side, Winner};

use crate::service::GameId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub southern_player: String,
    pub northern_player: String,
    pub current_player: Side,
    pub southern_pits: Vec<u32>,
    pub northern_pits: Vec<u32>,
    pub southern_kalaha: u32,
    pub northern_kalaha: u32,
    pub ended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl GameView {
    pub fn new(id: GameId, southern_player: &str, northern_player: &str, game: &Game) -> Self {
        let board = game.board();
        Self {
            id,
            southern_player: southern_player.to_string(),
            northern_player: northern_player.to_string(),
            current_player: game.current_side(),
            southern_pits: board.pits(Side::South).to_vec(),
            northern_pits: board.pits(Side::North).to_vec(),
            southern_kalaha: board.kalaha(Side::South),
            northern_kalaha: board.kalaha(Side::North),
            ended: game.is_ended(),
            winner: game.winner(),
        }
    }

    /// Name of the player seated on `side`
    pub fn player(&self, side: Side) -> &str {
        match side {
            Side::South => &self.southern_player,
            Side::North => &self.northern_player,
        }
    }

    /// Name of the player whose turn it is
    pub fn player_to_move(&self) -> &str {
        self.player(self.current_player)
    }
}

impl TryFrom<&GameView> for Game {
    type Error = BoardError;

    fn try_from(view: &GameView) -> Result<Self, Self::Error> {
        let board = Board::from_parts(
            view.southern_pits.clone(),
            view.northern_pits.clone(),
            view.southern_kalaha,
            view.northern_kalaha,
        )?;
        Ok(Game::restore(board, view.current_player, view.ended))
    }
}
