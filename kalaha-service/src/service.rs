//! Game registry and turn ownership
//!
//! Games live in memory behind a single `RwLock`. A move holds the write
//! lock for the whole `Game::play` call, so moves on a game are applied
//! one at a time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use kalaha_core::{Game, GameConfig, Side};

use crate::error::ServiceError;
use crate::view::GameView;

pub type GameId = u64;

/// A game plus who sits where
#[derive(Clone, Debug)]
struct SeatedGame {
    southern_player: String,
    northern_player: String,
    game: Game,
}

impl SeatedGame {
    fn player(&self, side: Side) -> &str {
        match side {
            Side::South => &self.southern_player,
            Side::North => &self.northern_player,
        }
    }

    fn view(&self, id: GameId) -> GameView {
        GameView::new(id, &self.southern_player, &self.northern_player, &self.game)
    }
}

/// All games hosted by this process
pub struct GameService {
    config: GameConfig,
    games: RwLock<FxHashMap<GameId, SeatedGame>>,
    next_id: AtomicU64,
}

impl GameService {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            games: RwLock::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get(&self, id: GameId) -> Result<GameView, ServiceError> {
        tracing::debug!(game_id = id, "fetching game");
        self.read()
            .get(&id)
            .map(|seated| seated.view(id))
            .ok_or(ServiceError::NotFound(id))
    }

    /// Every game, ongoing ones first, then by id
    pub fn list(&self) -> Vec<GameView> {
        let mut views: Vec<GameView> = self
            .read()
            .iter()
            .map(|(&id, seated)| seated.view(id))
            .collect();
        views.sort_by_key(|view| (view.ended, view.id));
        views
    }

    /// Games where `player` sits on either side
    pub fn games_of_player(&self, player: &str) -> Vec<GameView> {
        tracing::debug!(player, "fetching games of player");
        self.list()
            .into_iter()
            .filter(|view| view.southern_player == player || view.northern_player == player)
            .collect()
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Start a game with the configured table, SOUTH to move
    pub fn create(&self, southern_player: &str, northern_player: &str) -> GameView {
        let seated = SeatedGame {
            southern_player: southern_player.to_string(),
            northern_player: northern_player.to_string(),
            game: Game::new(&self.config),
        };
        let id = self.insert(seated.clone());
        tracing::info!(game_id = id, southern_player, northern_player, "created game");
        seated.view(id)
    }

    /// Re-host a game from its flattened view under a new id
    pub fn restore(&self, view: &GameView) -> Result<GameView, ServiceError> {
        let game = Game::try_from(view)?;
        let seated = SeatedGame {
            southern_player: view.southern_player.clone(),
            northern_player: view.northern_player.clone(),
            game,
        };
        let id = self.insert(seated.clone());
        tracing::info!(game_id = id, previous_id = view.id, "restored game");
        Ok(seated.view(id))
    }

    /// Play `pit` (zero-based) on behalf of `executing_player`
    pub fn make_move(
        &self,
        id: GameId,
        executing_player: &str,
        pit: usize,
    ) -> Result<GameView, ServiceError> {
        let mut games = self.write();
        let seated = games.get_mut(&id).ok_or(ServiceError::NotFound(id))?;
        let side = seated.game.current_side();

        tracing::info!(game_id = id, current_player = %side, pit, "executing move");

        if seated.player(side) != executing_player {
            tracing::warn!(game_id = id, executing_player, "move out of turn rejected");
            return Err(ServiceError::Unauthorized {
                game_id: id,
                player: executing_player.to_string(),
            });
        }

        if let Err(err) = seated.game.play(pit) {
            tracing::warn!(game_id = id, pit, error = %err, "invalid move rejected");
            return Err(err.into());
        }

        Ok(seated.view(id))
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn insert(&self, seated: SeatedGame) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.write().insert(id, seated);
        id
    }

    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<GameId, SeatedGame>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<GameId, SeatedGame>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let service = GameService::default();
        assert_eq!(service.create("a", "b").id, 1);
        assert_eq!(service.create("c", "d").id, 2);
    }

    #[test]
    fn test_create_uses_config() {
        let service = GameService::new(GameConfig::new(4, 3).unwrap());
        let view = service.create("a", "b");
        assert_eq!(view.southern_pits, vec![3; 4]);
        assert_eq!(view.northern_pits, vec![3; 4]);
    }

    #[test]
    fn test_seated_player_lookup() {
        let seated = SeatedGame {
            southern_player: "south".into(),
            northern_player: "north".into(),
            game: Game::default(),
        };
        assert_eq!(seated.player(Side::South), "south");
        assert_eq!(seated.player(Side::North), "north");
    }
}
