use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chess_duel::board::{
    encode, Board, BoardBuilder, CodecError, Color, Coord, PieceKind, PlainBoard, PositionError,
};
use chess_duel::session::{
    GameOutcome, LeaveOutcome, ParticipantId, SessionConfig, SessionError, SessionId, SessionStore,
};
use chess_duel::Game;

const ALICE: ParticipantId = ParticipantId(1);
const BOB: ParticipantId = ParticipantId(2);
const CAROL: ParticipantId = ParticipantId(3);

fn sq(name: &str) -> Coord {
    name.parse().unwrap()
}

/// Play a move locally and return the board a client would submit.
fn play(game: &mut Game, from: &str, to: &str) -> PlainBoard {
    game.play(sq(from), sq(to))
        .unwrap_or_else(|| panic!("{from}-{to} rejected on\n{}", game.board()));
    encode(game.board())
}

#[test]
fn full_game_lifecycle() {
    let store = SessionStore::with_seed(SessionConfig::default(), 7);
    let start = store.create(ALICE, encode(&Board::new())).unwrap();
    let id = start.id;
    assert_eq!(start.color, Color::White);
    assert_eq!(start.to_move, Color::White);
    assert_eq!(store.open_sessions(), vec![id]);

    assert_eq!(
        store.join(id, ALICE),
        Err(SessionError::AlreadySeated { participant: ALICE })
    );
    let joined = store.join(id, BOB).unwrap();
    assert_eq!(joined.color, Color::Black);
    assert_eq!(joined.board, start.board);
    assert!(store.open_sessions().is_empty());
    assert_eq!(store.join(id, CAROL), Err(SessionError::Full { id }));

    let mut game = Game::new();
    let first = play(&mut game, "f2", "f3");
    assert_eq!(
        store.submit_move(id, BOB, first.clone()),
        Err(SessionError::NotYourTurn {
            to_move: Color::White
        })
    );
    assert_eq!(
        store.submit_move(id, CAROL, first.clone()),
        Err(SessionError::NotSeated { participant: CAROL })
    );

    let broadcast = store.submit_move(id, ALICE, first).unwrap();
    assert_eq!(broadcast.to_move, Color::Black);
    assert_eq!(broadcast.outcome, None);

    store
        .submit_move(id, BOB, play(&mut game, "e7", "e5"))
        .unwrap();
    store
        .submit_move(id, ALICE, play(&mut game, "g2", "g4"))
        .unwrap();
    let mate = store
        .submit_move(id, BOB, play(&mut game, "d8", "h4"))
        .unwrap();
    assert_eq!(
        mate.outcome,
        Some(GameOutcome::Checkmate {
            winner: Color::Black
        })
    );
    assert_eq!(mate.to_move, Color::White);
    assert_eq!(mate.board, encode(game.board()));

    assert_eq!(
        store.submit_move(id, ALICE, encode(game.board())),
        Err(SessionError::GameOver { id })
    );

    let snapshot = store.snapshot(id).unwrap();
    assert_eq!(snapshot.white, Some(ALICE));
    assert_eq!(snapshot.black, Some(BOB));
    assert_eq!(snapshot.outcome, mate.outcome);

    assert_eq!(
        store.leave(id, ALICE),
        Ok(LeaveOutcome::OpponentRemains(BOB))
    );
    assert_eq!(store.open_sessions(), vec![id]);
    assert_eq!(
        store.leave(id, CAROL),
        Err(SessionError::NotSeated { participant: CAROL })
    );
    assert_eq!(store.leave(id, BOB), Ok(LeaveOutcome::Closed));
    assert!(store.snapshot(id).is_none());
    assert_eq!(
        store.submit_move(id, BOB, encode(&Board::new())),
        Err(SessionError::NotFound { id })
    );
}

#[test]
fn vacated_white_seat_can_be_retaken() {
    let store = SessionStore::default();
    let id = store.create(ALICE, encode(&Board::new())).unwrap().id;
    store.join(id, BOB).unwrap();
    store.leave(id, ALICE).unwrap();

    let rejoined = store.join(id, CAROL).unwrap();
    assert_eq!(rejoined.color, Color::White);
    assert_eq!(store.snapshot(id).unwrap().white, Some(CAROL));
}

#[test]
fn stalemate_is_broadcast() {
    let board = BoardBuilder::new()
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .piece(sq("f6"), Color::White, PieceKind::Queen)
        .piece(sq("g6"), Color::White, PieceKind::King)
        .build();
    let store = SessionStore::default();
    let id = store.create(ALICE, encode(&board)).unwrap().id;
    store.join(id, BOB).unwrap();

    let mut game = Game::from_board(board, Color::White);
    let broadcast = store
        .submit_move(id, ALICE, play(&mut game, "f6", "f7"))
        .unwrap();
    assert_eq!(broadcast.outcome, Some(GameOutcome::Stalemate));
}

#[test]
fn rejects_bad_boards() {
    let store = SessionStore::default();

    let kingless = encode(
        &BoardBuilder::new()
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build(),
    );
    assert_eq!(
        store.create(ALICE, kingless.clone()).unwrap_err(),
        SessionError::Position(PositionError::MissingKing {
            color: Color::White
        })
    );

    let mut short = encode(&Board::new());
    short.cells.truncate(7);
    assert_eq!(
        store.create(ALICE, short).unwrap_err(),
        SessionError::Codec(CodecError::RowCount { found: 7 })
    );
    assert!(store.is_empty());

    let lenient = SessionStore::new(SessionConfig::default().with_verify_kings(false));
    assert!(lenient.create(ALICE, kingless).is_ok());
}

#[test]
fn rejected_move_keeps_turn() {
    let store = SessionStore::default();
    let id = store.create(ALICE, encode(&Board::new())).unwrap().id;
    store.join(id, BOB).unwrap();

    let mut bad = encode(&Board::new());
    bad.cells[7][4].piece = None;
    assert!(matches!(
        store.submit_move(id, ALICE, bad),
        Err(SessionError::Position(_))
    ));
    assert_eq!(store.snapshot(id).unwrap().to_move, Color::White);
}

#[test]
fn capacity_limit() {
    let store = SessionStore::new(SessionConfig::default().with_max_sessions(2));
    let first = store.create(ALICE, encode(&Board::new())).unwrap();
    store.create(BOB, encode(&Board::new())).unwrap();
    assert_eq!(
        store.create(CAROL, encode(&Board::new())).unwrap_err(),
        SessionError::CapacityReached { limit: 2 }
    );

    assert_eq!(store.leave(first.id, ALICE), Ok(LeaveOutcome::Closed));
    assert!(store.create(CAROL, encode(&Board::new())).is_ok());
    assert_eq!(store.len(), 2);
}

#[test]
fn zero_capacity_refuses_creates() {
    let mut config = SessionConfig::default();
    config.apply_option("max sessions", "0").unwrap();
    let store = SessionStore::new(config);
    assert_eq!(
        store.create(ALICE, encode(&Board::new())).unwrap_err(),
        SessionError::CapacityReached { limit: 0 }
    );
    assert!(store.is_empty());
}

#[test]
fn idle_sessions_expire() {
    let store =
        SessionStore::new(SessionConfig::default().with_idle_timeout(Duration::from_secs(60)));
    let a = store.create(ALICE, encode(&Board::new())).unwrap().id;
    let b = store.create(BOB, encode(&Board::new())).unwrap().id;

    assert!(store.expire_idle(Instant::now()).is_empty());
    assert_eq!(store.len(), 2);

    let mut expected = vec![a, b];
    expected.sort();
    let expired = store.expire_idle(Instant::now() + Duration::from_secs(61));
    assert_eq!(expired, expected);
    assert!(store.is_empty());
}

#[test]
fn seeded_ids_are_reproducible() {
    let first = SessionStore::with_seed(SessionConfig::default(), 42);
    let second = SessionStore::with_seed(SessionConfig::default(), 42);
    let a = first.create(ALICE, encode(&Board::new())).unwrap().id;
    let b = second.create(ALICE, encode(&Board::new())).unwrap().id;
    assert_eq!(a, b);
    assert_eq!(a.to_string().parse::<SessionId>(), Ok(a));
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let store = Arc::new(SessionStore::default());
    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..10u64)
                    .map(|i| {
                        store
                            .create(ParticipantId(t * 100 + i), encode(&Board::new()))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(ids.len(), 80);
    assert_eq!(store.len(), 80);
}

#[cfg(feature = "serde")]
#[test]
fn broadcast_wire_shape() {
    let store = SessionStore::default();
    let id = store.create(ALICE, encode(&Board::new())).unwrap().id;
    let mut game = Game::new();
    let broadcast = store
        .submit_move(id, ALICE, play(&mut game, "e2", "e4"))
        .unwrap();

    let value = serde_json::to_value(&broadcast).unwrap();
    assert_eq!(value["toMove"], "black");
    assert!(value.get("outcome").is_none());
    assert_eq!(value["board"]["cells"][4][4]["figure"]["type"], "Pawn");
}
