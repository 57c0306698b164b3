//! Chess board representation and rules.
//!
//! Positions are an 8×8 grid of piece records plus the bookkeeping the
//! rules depend on (castling rights, en-passant target, clocks). Moves are
//! generated pseudo-legally, filtered for king safety, and applied or
//! taken back exactly.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState};
//!
//! let state = GameState::new();
//! let moves = state.legal_moves_for(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod error;
mod fen;
mod grid;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use grid::{Board, SquareCheck};
pub use movegen::MoveGenContext;
pub use state::GameState;
pub use types::{
    CastleSide, CastlingRights, CheckReport, CheckStatus, Color, Move, MoveList, Piece, PieceKind,
    PriorState, Square,
};
