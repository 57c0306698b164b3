//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let state = GameState::new();
//! assert_eq!(state.check_status(Color::White), CheckReport::default());
//! ```

pub use super::{
    CheckReport, CheckStatus, Color, FenError, GameState, Move, MoveList, MoveParseError, Piece,
    PieceKind, Square,
};
