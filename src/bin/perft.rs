//! Divide perft from the command line, for comparison against published tables.
//!
//! usage: perft <depth> [fen...]

use std::env;
use std::process;
use std::time::Instant;

use chess_rules::board::{GameState, START_FEN};
use chess_rules::perft::{run_perft, PerftConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(depth) = args.first().and_then(|d| d.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen...]");
        process::exit(2);
    };

    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        START_FEN.to_string()
    };
    let state = match GameState::try_from_fen(&fen) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let config = PerftConfig::from_env();
    let start = Instant::now();
    match run_perft(&state, depth, &config) {
        Ok(report) => {
            println!("{report}");
            let elapsed = start.elapsed();
            let nps = report.total as f64 / elapsed.as_secs_f64().max(1e-9);
            eprintln!(
                "depth {depth} in {:.3}s ({nps:.0} nodes/s, {} threads)",
                elapsed.as_secs_f64(),
                config.threads
            );
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
