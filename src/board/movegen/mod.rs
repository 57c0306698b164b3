//! Pseudo-legal move generation.
//!
//! Produces every geometrically valid move for one side without asking
//! whether it exposes the mover's own king; `legality` filters those.
//! Everything the generator needs beyond the board arrives through
//! [`MoveGenContext`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::{Board, CastlingRights, Color, Move, MoveList, Piece, PieceKind, PriorState, Square};

/// Position facts the generator consults besides piece placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveGenContext {
    /// Bookkeeping of the position, stamped into every generated move.
    pub prior: PriorState,
    /// Whether the generating side is currently in check.
    pub in_check: bool,
    /// Whether castling candidates should be produced at all.
    pub include_castles: bool,
}

impl MoveGenContext {
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.prior.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.prior.castling
    }
}

impl Board {
    /// Every pseudo-legal move for `color`.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color, ctx: &MoveGenContext) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            self.generate_piece_moves(&piece, ctx, &mut moves);
        }
        moves
    }

    pub(crate) fn generate_piece_moves(
        &self,
        piece: &Piece,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(piece, ctx, moves),
            PieceKind::Knight => self.generate_knight_moves(piece, ctx, moves),
            PieceKind::Bishop => self.generate_slider_moves(piece, &DIAGONAL, ctx, moves),
            PieceKind::Rook => self.generate_slider_moves(piece, &ORTHOGONAL, ctx, moves),
            PieceKind::Queen => self.generate_slider_moves(piece, &ALL_DIRECTIONS, ctx, moves),
            PieceKind::King => self.generate_king_moves(piece, ctx, moves),
        }
    }

    /// Candidate landing on `to`, taking `capture` off the board.
    #[inline]
    fn create_move(
        piece: &Piece,
        to: Square,
        capture: Option<Piece>,
        ctx: &MoveGenContext,
    ) -> Move {
        Move::new(piece.square, to, piece.kind, capture, ctx.prior)
    }
}
