use super::super::{Board, MoveList, Piece};
use super::MoveGenContext;

impl Board {
    /// Walk each direction one square at a time. Empty squares and the first
    /// opposing piece are destinations; the walk stops at the first occupied
    /// square or the edge.
    pub(crate) fn generate_slider_moves(
        &self,
        piece: &Piece,
        directions: &[(isize, isize)],
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut cursor = piece.square.offset(dr, df);
            while let Some(to) = cursor {
                let target = self.check_square(to, piece.color);
                if target.valid {
                    moves.push(Self::create_move(piece, to, target.capture, ctx));
                }
                if !target.valid || target.capture.is_some() {
                    break;
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}
