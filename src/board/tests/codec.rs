//! Plain board encoding and decoding.

use super::c;
use crate::board::{
    decode, encode, Board, BoardBuilder, CodecError, Color, PieceKind, PlainMove, PlainPiece,
};

#[test]
fn test_starting_board_round_trip() {
    let board = Board::new();
    let plain = encode(&board);
    assert_eq!(plain.cells.len(), 8);
    assert!(plain.cells.iter().all(|row| row.len() == 8));
    assert_eq!(decode(&plain), Ok(board));
}

#[test]
fn test_encoded_flags() {
    let mut board = Board::new();
    board.move_piece(c(4, 6), c(4, 4)).unwrap();
    let plain = encode(&board);

    let moved_pawn = plain.cells[4][4].piece.unwrap();
    assert_eq!(moved_pawn.is_first_step, Some(false));
    assert_eq!(moved_pawn.has_moved, None);

    let king = plain.cells[7][4].piece.unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(king.has_moved, Some(false));
    assert_eq!(king.is_first_step, None);

    assert!(plain.cells[6][4].piece.is_none());
    assert_eq!(plain.last_move.map(|m| (m.from.y, m.to.y)), Some((6, 4)));
}

#[test]
fn test_castling_flag_survives_round_trip() {
    let mut board = BoardBuilder::new()
        .piece(c(4, 7), Color::White, PieceKind::King)
        .piece(c(7, 7), Color::White, PieceKind::Rook)
        .piece(c(4, 0), Color::Black, PieceKind::King)
        .build();
    assert!(board.can_move(c(4, 7), c(6, 7)));

    board.move_piece(c(4, 7), c(4, 6)).unwrap();
    board.move_piece(c(4, 6), c(4, 7)).unwrap();

    let restored = decode(&encode(&board)).unwrap();
    assert!(restored.piece_at(c(4, 7)).is_some_and(|k| k.moved));
    assert!(!restored.can_move(c(4, 7), c(6, 7)));
}

#[test]
fn test_capture_lists_and_en_passant_memory_survive() {
    let mut board = BoardBuilder::new()
        .piece(c(4, 7), Color::White, PieceKind::King)
        .piece(c(4, 0), Color::Black, PieceKind::King)
        .moved_piece(c(3, 3), Color::White, PieceKind::Pawn)
        .piece(c(4, 1), Color::Black, PieceKind::Pawn)
        .captured(Color::White, PieceKind::Queen)
        .build();
    board.move_piece(c(4, 1), c(4, 3)).unwrap();

    let restored = decode(&encode(&board)).unwrap();
    assert_eq!(restored, board);
    assert!(restored.can_move(c(3, 3), c(4, 2)));
    assert_eq!(restored.captured_by_black().len(), 1);
}

#[test]
fn test_missing_flags_mean_unmoved() {
    let mut plain = encode(&Board::new());
    for row in &mut plain.cells {
        for cell in row.iter_mut() {
            if let Some(piece) = cell.piece.as_mut() {
                piece.is_first_step = None;
                piece.has_moved = None;
            }
        }
    }
    assert_eq!(decode(&plain), Ok(Board::new()));
}

#[test]
fn test_capture_entries_are_bare() {
    let board = BoardBuilder::new()
        .captured(Color::Black, PieceKind::Rook)
        .build();
    let plain = encode(&board);
    assert_eq!(
        plain.captured_by_white,
        vec![PlainPiece::bare(PieceKind::Rook, Color::Black)]
    );
    assert!(plain.captured_by_black.is_empty());
}

#[test]
fn test_decode_rejects_bad_grid() {
    let good = encode(&Board::new());

    let mut short = good.clone();
    short.cells.pop();
    assert_eq!(decode(&short), Err(CodecError::RowCount { found: 7 }));

    let mut ragged = good.clone();
    ragged.cells[2].pop();
    assert_eq!(
        decode(&ragged),
        Err(CodecError::RowLength { row: 2, found: 7 })
    );

    let mut swapped = good.clone();
    swapped.cells[0].swap(0, 1);
    assert_eq!(
        decode(&swapped),
        Err(CodecError::CoordinateMismatch {
            expected: c(0, 0),
            found: (1, 0)
        })
    );

    let mut tinted = good.clone();
    tinted.cells[3][3].tint = Color::Black;
    assert_eq!(
        decode(&tinted),
        Err(CodecError::TintMismatch {
            at: c(3, 3),
            found: Color::Black
        })
    );
}

#[test]
fn test_decode_rejects_out_of_bounds_last_move() {
    let mut plain = encode(&Board::new());
    plain.last_move = Some(PlainMove {
        from: c(4, 1).into(),
        to: crate::board::PlainCoord { x: 4, y: 9 },
    });
    assert_eq!(
        decode(&plain),
        Err(CodecError::LastMoveOutOfBounds { x: 4, y: 9 })
    );
}

#[test]
fn test_reencoding_is_stable() {
    let mut board = Board::new();
    board.move_piece(c(6, 7), c(5, 5)).unwrap();
    board.move_piece(c(3, 1), c(3, 3)).unwrap();
    let plain = encode(&board);
    let again = encode(&decode(&plain).unwrap());
    assert_eq!(plain, again);
}

#[cfg(feature = "serde")]
mod json {
    use super::c;
    use crate::board::{decode, encode, Board, PlainBoard};

    #[test]
    fn test_wire_field_names() {
        let mut board = Board::new();
        board.move_piece(c(4, 1), c(4, 3)).unwrap();
        let value = serde_json::to_value(encode(&board)).unwrap();

        assert!(value.get("lostBlackFigures").is_some());
        assert!(value.get("lostWhiteFigures").is_some());
        assert_eq!(value["lastMove"]["from"]["y"], 1);

        let rook = &value["cells"][0][0];
        assert_eq!(rook["color"], "white");
        assert_eq!(rook["figure"]["type"], "Rook");
        assert_eq!(rook["figure"]["color"], "black");
        assert_eq!(rook["figure"]["hasMoved"], false);
        assert!(rook["figure"].get("isFirstStep").is_none());

        assert_eq!(value["cells"][3][4]["figure"]["isFirstStep"], false);
        assert!(value["cells"][4][4]["figure"].is_null());
    }

    #[test]
    fn test_json_round_trip() {
        let board = Board::new();
        let text = serde_json::to_string(&encode(&board)).unwrap();
        let plain: PlainBoard = serde_json::from_str(&text).unwrap();
        assert_eq!(decode(&plain), Ok(board));
    }

    #[test]
    fn test_accepts_flagless_pieces() {
        let mut value = serde_json::to_value(encode(&Board::new())).unwrap();
        value["cells"][6][0]["figure"] = serde_json::json!({"type": "Pawn", "color": "white"});
        let plain: PlainBoard = serde_json::from_value(value).unwrap();
        let board = decode(&plain).unwrap();
        assert!(board.can_move(c(0, 6), c(0, 4)));
    }
}
