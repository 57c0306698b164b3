//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::{CastleSide, CastlingRights};
use super::piece::{Piece, PieceKind};
use super::square::Square;
use super::status::CheckStatus;

/// Position bookkeeping a move overwrites, captured when the move is
/// generated so that undo can restore it verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorState {
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) checks: [CheckStatus; 2],
}

/// A move together with everything needed to take it back.
///
/// `captured` holds the removed piece as it stood before the move,
/// including its square; for en passant that square is one rank behind
/// `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece: PieceKind,
    pub(crate) captured: Option<Piece>,
    pub(crate) prior: PriorState,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<Piece>,
        prior: PriorState,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            prior,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Type of the moving piece
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    /// The piece this move removes from the board, if any
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if the captured pawn stood beside, not on, the target square
    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some(victim) if victim.square != self.to)
    }

    /// Returns true if this is a king stepping two files
    #[inline]
    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.castle_side().is_some()
    }

    /// Side castled toward, for castling moves
    #[must_use]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.piece != PieceKind::King || self.from.0 != self.to.0 {
            return None;
        }
        match self.to.1 as isize - self.from.1 as isize {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece == PieceKind::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Same origin and destination, ignoring bookkeeping
    #[inline]
    #[must_use]
    pub fn same_squares(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {}", self.from, self.to, self.piece)?;
        if let Some(victim) = self.captured {
            write!(f, " x{}@{}", victim.kind, victim.square)?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Initial capacity; enough for almost every position without regrowing.
const MOVE_LIST_CAPACITY: usize = 64;

/// List of moves in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MOVE_LIST_CAPACITY),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Look up a move by its squares.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().find(|mv| mv.same_squares(from, to)).copied()
    }

    #[must_use]
    pub fn contains_squares(&self, from: Square, to: Square) -> bool {
        self.find(from, to).is_some()
    }

    /// True if any move in the list lands on `sq`.
    #[must_use]
    pub fn targets(&self, sq: Square) -> bool {
        self.iter().any(|mv| mv.to == sq)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
