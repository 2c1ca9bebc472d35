//! Integration tests for kalaha-service

use kalaha_core::{BoardError, GameConfig, InvalidMovementError, Side, Winner};
use kalaha_service::{GameService, GameView, ServiceError};

fn small_service() -> GameService {
    GameService::new(GameConfig::new(2, 1).unwrap())
}

#[test]
fn test_create_and_get() {
    let service = GameService::default();
    let created = service.create("alice", "bob");

    let fetched = service.get(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.current_player, Side::South);
    assert_eq!(fetched.southern_player, "alice");
    assert_eq!(fetched.northern_player, "bob");
}

#[test]
fn test_get_unknown_game() {
    let service = GameService::default();
    let err = service.get(42).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(42)));
    assert_eq!(err.to_string(), "game with id 42 not found");
}

#[test]
fn test_move_updates_view() {
    let service = GameService::default();
    let game = service.create("alice", "bob");

    let view = service.make_move(game.id, "alice", 1).unwrap();
    assert_eq!(view.southern_pits, vec![6, 0, 7, 7, 7, 7]);
    assert_eq!(view.northern_pits, vec![7, 6, 6, 6, 6, 6]);
    assert_eq!(view.southern_kalaha, 1);
    assert_eq!(view.current_player, Side::North);

    // the stored game reflects the move
    assert_eq!(service.get(game.id).unwrap(), view);
}

#[test]
fn test_move_by_wrong_player_rejected() {
    let service = GameService::default();
    let game = service.create("alice", "bob");

    let err = service.make_move(game.id, "bob", 0).unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized { ref player, .. } if player == "bob"));
    assert!(err.is_rejected_move());
    assert_eq!(service.get(game.id).unwrap(), game);
}

#[test]
fn test_move_on_unknown_game() {
    let service = GameService::default();
    let err = service.make_move(9, "alice", 0).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(9)));
    assert!(!err.is_rejected_move());
}

#[test]
fn test_invalid_move_propagates() {
    let service = GameService::default();
    let game = service.create("alice", "bob");

    let err = service.make_move(game.id, "alice", 6).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidMovement(InvalidMovementError::PitOutOfRange { pit: 6, pit_count: 6 })
    ));

    // extra turn: pit 0 ends in the kalaha, alice moves again
    service.make_move(game.id, "alice", 0).unwrap();
    let err = service.make_move(game.id, "alice", 0).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidMovement(InvalidMovementError::EmptyPit { pit: 0 })
    ));
}

#[test]
fn test_game_runs_to_completion() {
    // two pits, one stone each: South [1,1], North [1,1]
    let service = small_service();
    let game = service.create("alice", "bob");

    // south pit 1 -> kalaha, extra turn
    let view = service.make_move(game.id, "alice", 1).unwrap();
    assert_eq!(view.current_player, Side::South);

    // south pit 0 -> empty pit 1, captures facing north pit 0
    let view = service.make_move(game.id, "alice", 0).unwrap();
    assert_eq!(view.southern_kalaha, 3);
    assert_eq!(view.current_player, Side::North);
    assert!(!view.ended);

    // north pit 1 -> kalaha, north to move with nothing left
    let view = service.make_move(game.id, "bob", 1).unwrap();
    assert!(view.ended);
    assert_eq!(view.northern_kalaha, 1);
    assert_eq!(view.winner, Some(Winner::South));

    let err = service.make_move(game.id, "bob", 0).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidMovement(InvalidMovementError::GameEnded)));
}

#[test]
fn test_list_orders_ongoing_first() {
    let service = small_service();
    let first = service.create("alice", "bob");
    let second = service.create("carol", "dave");
    let third = service.create("alice", "erin");

    // finish the first game
    service.make_move(first.id, "alice", 1).unwrap();
    service.make_move(first.id, "alice", 0).unwrap();
    service.make_move(first.id, "bob", 1).unwrap();

    let ids: Vec<_> = service.list().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![second.id, third.id, first.id]);
}

#[test]
fn test_games_of_player() {
    let service = GameService::default();
    let a = service.create("alice", "bob");
    service.create("carol", "dave");
    let c = service.create("erin", "alice");

    let ids: Vec<_> = service.games_of_player("alice").iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    assert!(service.games_of_player("zed").is_empty());
}

#[test]
fn test_restore_from_json() {
    let service = GameService::default();
    let game = service.create("alice", "bob");
    service.make_move(game.id, "alice", 3).unwrap();
    let saved = service.get(game.id).unwrap();

    let json = serde_json::to_string(&saved).unwrap();
    let parsed: GameView = serde_json::from_str(&json).unwrap();

    let other = GameService::default();
    let restored = other.restore(&parsed).unwrap();
    assert_eq!(restored.id, 1);
    assert_eq!(restored.southern_pits, saved.southern_pits);
    assert_eq!(restored.current_player, Side::North);

    let view = other.make_move(restored.id, "bob", 0).unwrap();
    assert_eq!(view.current_player, Side::South);
}

#[test]
fn test_restore_rejects_malformed_view() {
    let service = GameService::default();
    let mut view = service.create("alice", "bob");
    view.southern_pits.push(3);

    let err = service.restore(&view).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidBoard(_)));
}

#[test]
fn test_restore_finishes_position_with_no_moves() {
    let service = GameService::new(GameConfig::new(3, 1).unwrap());
    let mut view = service.create("alice", "bob");
    view.southern_pits = vec![0, 0, 0];
    view.northern_pits = vec![1, 2, 3];
    view.southern_kalaha = 0;
    view.ended = false;

    let restored = service.restore(&view).unwrap();
    assert!(restored.ended);
    assert_eq!(restored.northern_pits, vec![0, 0, 0]);
    assert_eq!(restored.northern_kalaha, 6);
    assert_eq!(restored.winner, Some(Winner::North));

    let err = service.make_move(restored.id, "alice", 0).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidMovement(InvalidMovementError::GameEnded)));
}

#[test]
fn test_restore_rejects_overflowing_stores() {
    let service = small_service();
    let mut view = service.create("a", "b");
    view.southern_kalaha = u32::MAX;

    let err = service.restore(&view).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidBoard(BoardError::TooManyStones)));
}

#[test]
fn test_moves_from_many_threads() {
    let service = std::sync::Arc::new(GameService::default());
    let ids: Vec<_> = (0..8).map(|i| service.create(&format!("s{}", i), &format!("n{}", i)).id).collect();

    let handles: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.make_move(id, &format!("s{}", i), 2))
        })
        .collect();

    for handle in handles {
        let view = handle.join().unwrap().unwrap();
        assert_eq!(view.current_player, Side::North);
        assert_eq!(view.southern_kalaha, 1);
    }
}
