use std::env;
use std::process;

use chess_rules::board::START_FEN;
use chess_rules::Game;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (fen, moves) = match args.first().map(String::as_str) {
        Some("--fen") => match args.get(1) {
            Some(fen) => (fen.as_str(), &args[2..]),
            None => {
                eprintln!("usage: status [--fen <FEN>] <move1> <move2> ...");
                process::exit(2);
            }
        },
        _ => (START_FEN, &args[..]),
    };

    let mut game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    for mv in moves {
        if let Err(err) = game.play_uci(mv) {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }

    let side = game.side_to_move();
    let report = game.check_status(side);
    let legal_moves = game.legal_moves();

    println!("{}", game.state().board());
    println!("fen: {}", game.state().to_fen());
    println!("side_to_move: {side}");
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", report.check);
    println!("checkmate: {}", report.checkmate);
    println!("stalemate: {}", report.stalemate);
    for mv in &legal_moves {
        println!("{mv}");
    }
}
