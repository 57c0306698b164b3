use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, MoveList, Piece};
use super::MoveGenContext;

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        piece: &Piece,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        for &to in &KNIGHT_TARGETS[piece.square.index()] {
            let target = self.check_square(to, piece.color);
            if target.valid {
                moves.push(Self::create_move(piece, to, target.capture, ctx));
            }
        }
    }
}
