//! Property-based tests using proptest.

use crate::board::{Color, GameState, Move, PieceKind};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start, returning the
/// positions visited (start first) and the moves between them.
fn random_playout(seed: u64, num_moves: usize) -> (Vec<GameState>, Vec<Move>) {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut states = vec![GameState::new()];
    let mut moves = Vec::new();
    for _ in 0..num_moves {
        let state = states.last().unwrap();
        let legal = state.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.gen_range(0..legal.len())];
        let next = state.commit(&mv);
        states.push(next);
        moves.push(mv);
    }
    (states, moves)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: undo_move(apply_move(s, m), m) == s for every move played
    #[test]
    fn prop_undo_inverts_apply(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, moves) = random_playout(seed, num_moves);
        for (before, mv) in states.iter().zip(&moves) {
            let after = before.apply_move(mv);
            prop_assert_eq!(&after.undo_move(mv), before);
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_sound(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, _) = random_playout(seed, num_moves);
        let state = states.last().unwrap();
        let mover = state.active_color();
        for mv in &state.legal_moves() {
            let next = state.apply_move(mv);
            prop_assert!(!next.is_in_check(mover), "{} exposes the king", mv);
        }
    }

    /// Property: every pseudo-legal move that keeps the king safe is listed
    #[test]
    fn prop_legal_moves_are_complete(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, _) = random_playout(seed, num_moves);
        let state = states.last().unwrap();
        let mover = state.active_color();
        let legal = state.legal_moves();
        for mv in &state.pseudo_legal_moves(mover) {
            let safe = !state.apply_move(mv).is_in_check(mover);
            prop_assert_eq!(safe, legal.as_slice().contains(mv), "{}", mv);
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, _) = random_playout(seed, num_moves);
        let state = states.last().unwrap();
        let reparsed = GameState::from_fen(&state.to_fen());
        prop_assert_eq!(reparsed.to_fen(), state.to_fen());
        prop_assert_eq!(reparsed.legal_moves().len(), state.legal_moves().len());
    }

    /// Property: the board stays consistent and each side keeps one king
    #[test]
    fn prop_board_invariants(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, _) = random_playout(seed, num_moves);
        for state in &states {
            prop_assert!(state.board().is_consistent());
            for color in Color::BOTH {
                prop_assert_eq!(state.board().count(color, PieceKind::King), 1);
            }
        }
    }

    /// Property: the fullmove number counts completed Black moves
    #[test]
    fn prop_fullmove_tracks_black_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (states, moves) = random_playout(seed, num_moves);
        let last = states.last().unwrap();
        prop_assert_eq!(last.fullmove_number() as usize, 1 + moves.len() / 2);
        let expected = if moves.len() % 2 == 0 { Color::White } else { Color::Black };
        prop_assert_eq!(last.active_color(), expected);
    }
}
