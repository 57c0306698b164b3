pub mod board;
pub mod game;
pub mod perft;

pub use board::{CheckStatus, Color, GameState, Move, Piece, PieceKind, Square};
pub use game::Game;
