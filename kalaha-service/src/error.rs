//! Service-level errors

use kalaha_core::{BoardError, InvalidMovementError};

use crate::service::GameId;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("game with id {0} not found")]
    NotFound(GameId),

    /// Someone other than the player of the side to move tried to play
    #[error("player {player} is not the one to move in game {game_id}")]
    Unauthorized { game_id: GameId, player: String },

    #[error(transparent)]
    InvalidMovement(#[from] InvalidMovementError),

    #[error("stored board is malformed: {0}")]
    InvalidBoard(#[from] BoardError),
}

impl ServiceError {
    /// Errors caused by the request rather than by missing data
    pub fn is_rejected_move(&self) -> bool {
        matches!(self, ServiceError::Unauthorized { .. } | ServiceError::InvalidMovement(_))
    }
}
