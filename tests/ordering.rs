use taperbot::board::{is_capture, legal_moves, victim_of, Position};
use taperbot::search::mvv_lva;

use cozy_chess::Piece;

#[test]
fn pawn_takes_queen_scores_highest() {
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let board = pos.board();
    let moves = legal_moves(board, false);
    let capture = moves
        .iter()
        .find(|m| m.to_string() == "e4d5")
        .copied()
        .expect("pawn capture exists");
    // Victim queen (5), aggressor pawn (1): 100 * 5 - 1.
    assert!(is_capture(board, capture));
    assert_eq!(mvv_lva(board, capture), 499);
    let quiet = moves.iter().find(|m| m.to_string() == "a1b1").copied().expect("quiet move");
    assert!(!is_capture(board, quiet));
    assert_eq!(mvv_lva(board, quiet), 0);
}

#[test]
fn heavier_aggressor_scores_lower_on_same_victim() {
    // Both the pawn and the rook can take the queen; MVV-LVA prefers the pawn.
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K2R4 w - - 0 1").expect("valid fen");
    let board = pos.board();
    let moves = legal_moves(board, false);
    let pawn_takes = moves.iter().find(|m| m.to_string() == "e4d5").copied().expect("exd5");
    let rook_takes = moves.iter().find(|m| m.to_string() == "d1d5").copied().expect("Rxd5");
    assert!(mvv_lva(board, pawn_takes) > mvv_lva(board, rook_takes));
}

#[test]
fn captures_only_generation_is_exactly_the_captures() {
    let pos = Position::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let board = pos.board();
    let captures = legal_moves(board, true);
    assert_eq!(captures.len(), 1, "only exd5 captures here: {captures:?}");
    assert_eq!(captures[0].to_string(), "e4d5");
    assert!(legal_moves(board, false).len() > captures.len());
}

#[test]
fn castling_is_a_quiet_move() {
    // Castling is encoded as king-takes-own-rook; the friendly rook on the
    // destination square is not a victim.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("valid fen");
    let board = pos.board();
    let castle = legal_moves(board, false)
        .iter()
        .find(|m| m.to_string() == "e1h1")
        .copied()
        .expect("castling is legal here");
    assert_eq!(victim_of(board, castle), None);
    assert!(!is_capture(board, castle));
    assert_eq!(mvv_lva(board, castle), 0);
    assert!(legal_moves(board, true).is_empty(), "no captures in this position");
}

#[test]
fn en_passant_is_a_pawn_capture() {
    let mut pos = Position::startpos();
    for m in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        pos.play_uci(m).expect("legal move");
    }
    let board = pos.board();
    let captures = legal_moves(board, true);
    let ep = captures
        .iter()
        .find(|m| m.to_string() == "e5d6")
        .copied()
        .expect("en passant must be generated as a capture");
    assert_eq!(victim_of(board, ep), Some(Piece::Pawn));
    assert_eq!(mvv_lva(board, ep), 100 - 1);
}
