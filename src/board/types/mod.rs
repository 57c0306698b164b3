//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Color` and `Piece` - piece types, colors and placed pieces
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - reversible move representation
//! - `CastlingRights` - castling state
//! - `CheckStatus` - check / checkmate / stalemate

mod castling;
mod moves;
mod piece;
mod square;
mod status;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, PriorState};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use status::{CheckReport, CheckStatus};
