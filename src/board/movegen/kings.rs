use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, CastleSide, MoveList, Piece, PieceKind, Square};
use super::MoveGenContext;

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        king: &Piece,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        for &to in &KING_TARGETS[king.square.index()] {
            let target = self.check_square(to, king.color);
            if target.valid {
                moves.push(Self::create_move(king, to, target.capture, ctx));
            }
        }

        if ctx.include_castles {
            for side in CastleSide::BOTH {
                if self.can_castle(king, side, ctx) {
                    let file = king.square.1 as isize + 2 * side.direction();
                    let to = Square(king.square.0, file as usize);
                    moves.push(Self::create_move(king, to, None, ctx));
                }
            }
        }
    }

    /// Castling preconditions: unmoved king on its home square, the right
    /// still held, not in check, an unmoved rook in the corner, and every
    /// square between king and rook empty and unattacked.
    fn can_castle(&self, king: &Piece, side: CastleSide, ctx: &MoveGenContext) -> bool {
        let color = king.color;
        let home = Square(color.back_rank(), 4);
        if king.has_moved() || king.square != home || ctx.in_check {
            return false;
        }
        if !ctx.castling().has(color, side) {
            return false;
        }

        let rook_sq = Square(home.0, side.rook_file());
        let rook_ready = matches!(
            self.piece_at(rook_sq),
            Some(rook) if rook.color == color && rook.kind == PieceKind::Rook && !rook.has_moved()
        );
        if !rook_ready {
            return false;
        }

        let (low, high) = if rook_sq.1 < home.1 {
            (rook_sq.1 + 1, home.1)
        } else {
            (home.1 + 1, rook_sq.1)
        };
        let opponent = color.opponent();
        (low..high).all(|file| {
            let sq = Square(home.0, file);
            self.is_empty(sq) && !self.is_square_attacked(sq, opponent)
        })
    }
}
