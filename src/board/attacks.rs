//! Square attack detection.
//!
//! Answers "could a piece of this color capture on that square" by looking
//! outward from the square, so it also works for empty squares (castling
//! paths) where pawn pushes must not count and pawn diagonals must.

use super::attack_tables::{DIAGONAL, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL};
use super::{Board, Color, PieceKind, Square};

impl Board {
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let hits = |sq: Square, kind: PieceKind| {
            matches!(self.piece_at(sq), Some(p) if p.color == attacker && p.kind == kind)
        };

        // An attacking pawn stands one step behind the square from its own point of view
        let pawn_rank = -attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(pawn_rank, df) {
                if hits(sq, PieceKind::Pawn) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| hits(sq, PieceKind::Knight))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| hits(sq, PieceKind::King))
        {
            return true;
        }

        self.ray_hits(square, &ORTHOGONAL, attacker, PieceKind::Rook)
            || self.ray_hits(square, &DIAGONAL, attacker, PieceKind::Bishop)
    }

    /// Walk each ray until the first piece; true if it is an attacker's
    /// `slider` or queen.
    fn ray_hits(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        attacker: Color,
        slider: PieceKind,
    ) -> bool {
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(sq) = cursor {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == attacker
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                cursor = sq.offset(dr, df);
            }
        }
        false
    }

    /// Whether `color`'s king is attacked.
    ///
    /// # Panics
    /// Panics if the color has no king.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
