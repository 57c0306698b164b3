//! Edge case tests for special chess positions and moves.

use crate::board::{CheckStatus, Color, GameState, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_stalemate_position() {
    let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let report = state.check_status(Color::Black);
    assert!(!report.checkmate);
    assert!(report.stalemate);
    assert!(state.legal_moves().is_empty());
    assert_eq!(state.status_of(Color::Black), CheckStatus::Stalemate);
}

#[test]
fn test_smothered_mate() {
    let state = GameState::from_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(state.status_for(Color::Black), CheckStatus::Checkmate);
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let state = GameState::from_fen("6k1/5pp1/8/8/8/8/8/R5K1 w - - 0 1");
    let next = state.commit(&state.legal_moves().find(sq("a1"), sq("a8")).unwrap());
    let report = next.check_status(Color::Black);
    assert!(report.check);
    assert!(!report.checkmate);
    assert!(next.legal_moves().targets(sq("h7")));
}

#[test]
fn test_en_passant_window_closes() {
    let mut state = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    state = state.commit(&state.legal_moves().find(sq("d7"), sq("d5")).unwrap());
    assert!(state
        .legal_moves()
        .iter()
        .any(|mv| mv.is_en_passant() && mv.to() == sq("d6")));

    // A waiting move on each side, then the capture is gone
    state = state.commit(&state.legal_moves().find(sq("e1"), sq("e2")).unwrap());
    state = state.commit(&state.legal_moves().find(sq("e8"), sq("e7")).unwrap());
    assert!(!state.legal_moves().iter().any(|mv| mv.is_en_passant()));
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let state = GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let mv = state
        .legal_moves()
        .iter()
        .copied()
        .find(|mv| mv.is_en_passant())
        .expect("En passant should be available");
    assert_eq!(mv.captured().unwrap().square, sq("d5"));

    let next = state.apply_move(&mv);
    assert!(next.board().is_empty(sq("d5")));
    assert_eq!(next.board().piece_at(sq("d6")).unwrap().color, Color::White);
}

#[test]
fn test_moved_king_loses_castling_for_good() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for (from, to) in [("e1", "f1"), ("e8", "d8"), ("f1", "e1"), ("d8", "e8")] {
        state = state.commit(&state.legal_moves().find(sq(from), sq(to)).unwrap());
    }
    assert_eq!(state.castling().to_fen(), "-");
    assert!(!state.legal_moves().iter().any(|mv| mv.is_castling()));
}

#[test]
fn test_pawn_on_last_rank_is_stuck() {
    // No promotion: a pawn that reaches the far rank has no moves at all
    let state = GameState::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let moves = state.legal_moves();
    assert!(moves.iter().all(|mv| mv.piece() == PieceKind::King));
}

#[test]
fn test_pawn_push_to_last_rank_stays_a_pawn() {
    let state = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mv = state.legal_moves().find(sq("a7"), sq("a8")).unwrap();
    let next = state.apply_move(&mv);
    assert_eq!(next.board().piece_at(sq("a8")).unwrap().kind, PieceKind::Pawn);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/3q4/2b1K3 w - - 0 1");
    let legal = state.legal_moves();
    assert!(!legal.targets(sq("d2")));
}

#[test]
fn test_double_check_only_king_moves() {
    // Rook on e8 and bishop on b4 both check the king on e1
    let state = GameState::from_fen("4r1k1/8/8/8/1b6/6N1/8/4K3 w - - 0 1");
    assert!(state.is_in_check(Color::White));
    assert!(state
        .legal_moves()
        .iter()
        .all(|mv| mv.piece() == PieceKind::King));
}
