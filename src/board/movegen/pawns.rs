use super::super::{Board, MoveList, Piece, PieceKind};
use super::MoveGenContext;

impl Board {
    /// Pushes onto empty squares, a double push for an unmoved pawn,
    /// diagonal captures of opposing pieces, and en passant.
    ///
    /// A pawn with no square ahead of it produces nothing.
    pub(crate) fn generate_pawn_moves(
        &self,
        pawn: &Piece,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        let dir = pawn.color.pawn_direction();
        let from = pawn.square;

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                moves.push(Self::create_move(pawn, single, None, ctx));
                if !pawn.has_moved() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Self::create_move(pawn, double, None, ctx));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some(victim) if victim.color != pawn.color => {
                    moves.push(Self::create_move(pawn, target, Some(victim), ctx));
                }
                Some(_) => {}
                None if ctx.en_passant() == Some(target) => {
                    // The pawn being taken sits beside us, one rank behind the target
                    let victim_sq = target
                        .offset(-dir, 0)
                        .expect("en passant target has a square behind it");
                    if let Some(victim) = self
                        .piece_at(victim_sq)
                        .filter(|victim| victim.color != pawn.color && victim.kind == PieceKind::Pawn)
                    {
                        moves.push(Self::create_move(pawn, target, Some(victim), ctx));
                    }
                }
                None => {}
            }
        }
    }
}
