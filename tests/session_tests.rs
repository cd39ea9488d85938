//! Session tests - the spawn, fall and lock cycle through the public API

use tetra_grid::core::{GameSession, MoveOutcome, Piece};
use tetra_grid::types::{
    GameAction, SessionPhase, BOARD_HEIGHT, BOARD_WIDTH, NEXT_PIECE_POSITION,
};

fn min_col(piece: &Piece) -> i32 {
    piece.cells().map(|(col, _, _)| col).min().unwrap()
}

fn max_col(piece: &Piece) -> i32 {
    piece.cells().map(|(col, _, _)| col).max().unwrap()
}

fn max_row(piece: &Piece) -> i32 {
    piece.cells().map(|(_, row, _)| row).max().unwrap()
}

/// Hard drop every piece in place until the session ends.
fn play_until_game_over(session: &mut GameSession) -> u32 {
    let mut drops = 0;
    while !session.is_game_over() {
        assert!(session.hard_drop().is_some());
        drops += 1;
        assert!(drops < 500, "session never ended");
    }
    drops
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameSession::new(2024);
    let mut b = GameSession::new(2024);

    for _ in 0..20 {
        assert_eq!(a.piece(), b.piece());
        assert_eq!(a.next_piece(), b.next_piece());
        a.hard_drop();
        b.hard_drop();
    }
}

#[test]
fn test_new_session_spawns_piece_and_preview() {
    let session = GameSession::new(1);

    let piece = session.piece();
    assert_eq!(piece, Piece::spawn(piece.kind, piece.rotation));
    assert_eq!(max_row(&piece), 0);

    let next = session.next_piece();
    assert_eq!((next.col, next.row), NEXT_PIECE_POSITION);

    assert_eq!(session.phase(), SessionPhase::Spawned);
    assert_eq!(session.pieces_spawned(), 1);
    assert_eq!(session.lines_cleared(), 0);
    assert_eq!(session.board().filled_count(), 0);
}

#[test]
fn test_first_request_starts_falling() {
    let mut session = GameSession::new(3);
    session.move_left();
    assert_eq!(session.phase(), SessionPhase::Falling);
}

#[test]
fn test_piece_falls_to_floor_then_locks() {
    let mut session = GameSession::new(11);
    let spawned = session.piece();

    let mut moves = 0;
    let event = loop {
        match session.move_down() {
            MoveOutcome::Moved => moves += 1,
            MoveOutcome::Locked(event) => break event,
            MoveOutcome::Ignored => panic!("request ignored in a live session"),
        }
    };

    // Spawned with its lowest block on row 0; locked with it on the floor.
    assert_eq!(moves, BOARD_HEIGHT as i32 - 1);
    assert_eq!(event.lines_cleared, 0);
    assert!(!event.game_over);
    assert_eq!(session.board().filled_count(), 4);
    for (col, row, _) in spawned.cells() {
        assert!(!session.board().is_free_block(col, row + moves));
    }
}

#[test]
fn test_lock_promotes_next_piece() {
    let mut session = GameSession::new(5);
    let next = session.next_piece();

    session.hard_drop();

    assert_eq!(session.piece(), Piece::spawn(next.kind, next.rotation));
    assert_eq!(session.phase(), SessionPhase::Spawned);
    assert_eq!(session.pieces_spawned(), 2);
}

#[test]
fn test_walls_stop_sideways_movement() {
    let mut session = GameSession::new(8);

    while session.move_left() {}
    assert_eq!(min_col(&session.piece()), 0);
    assert!(!session.can_move(-1, 0));

    while session.move_right() {}
    assert_eq!(max_col(&session.piece()), BOARD_WIDTH as i32 - 1);
    assert!(!session.can_move(1, 0));
}

#[test]
fn test_four_rotations_return_to_start() {
    let mut session = GameSession::new(9);
    let start = session.piece();

    for _ in 0..4 {
        assert!(session.rotate_cw());
    }
    assert_eq!(session.piece(), start);

    assert!(session.rotate_ccw());
    assert_eq!(session.piece().rotation, start.rotation.rotate_ccw());
}

#[test]
fn test_take_last_event_consumes() {
    let mut session = GameSession::new(4);
    assert!(session.take_last_event().is_none());

    let event = session.hard_drop();
    assert_eq!(session.take_last_event(), event);
    assert!(session.take_last_event().is_none());
}

#[test]
fn test_stacking_ends_the_game() {
    let mut session = GameSession::new(77);
    let drops = play_until_game_over(&mut session);

    assert!(drops > 1);
    assert!(session.board().is_game_over());
    assert_eq!(session.phase(), SessionPhase::GameOver);
    // Spawns never reach the outer columns, so no row can fill.
    assert_eq!(session.lines_cleared(), 0);
}

#[test]
fn test_game_over_rejects_requests() {
    let mut session = GameSession::new(77);
    play_until_game_over(&mut session);

    let piece = session.piece();
    let filled = session.board().filled_count();

    assert!(!session.move_left());
    assert!(!session.move_right());
    assert!(!session.rotate_cw());
    assert!(!session.rotate_ccw());
    assert_eq!(session.move_down(), MoveOutcome::Ignored);
    assert!(session.hard_drop().is_none());
    assert!(!session.apply_action(GameAction::HardDrop));

    assert_eq!(session.piece(), piece);
    assert_eq!(session.board().filled_count(), filled);
    assert_eq!(session.phase(), SessionPhase::GameOver);
}

#[test]
fn test_restart_leaves_game_over() {
    let mut session = GameSession::new(77);
    play_until_game_over(&mut session);

    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.phase(), SessionPhase::Spawned);
    assert_eq!(session.episode_id(), 1);
    assert_eq!(session.pieces_spawned(), 1);
    assert_eq!(session.board().filled_count(), 0);
    assert!(!session.is_game_over());
    assert!(session.move_down() != MoveOutcome::Ignored);
}
