//! Legal move filtering.
//!
//! A candidate survives when, after playing it on a scratch copy, no
//! pseudo-legal reply of the opponent lands on the mover's king.

use super::{Color, GameState, Move, MoveList, PieceKind};

impl GameState {
    /// Every legal move for `color`, in generation order.
    ///
    /// # Panics
    /// Panics if `color` has no king.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> MoveList {
        let candidates = self.pseudo_legal_moves(color);
        let king_home = self.board.king_square(color);
        let opponent = color.opponent();

        let mut scratch = self.clone();
        let mut legal = MoveList::new();
        for mv in candidates {
            scratch.make_move(&mv);

            let king = if mv.piece() == PieceKind::King {
                mv.to()
            } else {
                king_home
            };
            // The captured piece is off the scratch board, so it cannot reply
            let replies = scratch
                .board
                .pseudo_legal_moves(opponent, &scratch.move_context(opponent, false));
            let exposed = replies.targets(king);

            scratch.unmake_move(&mv);

            if exposed {
                #[cfg(feature = "logging")]
                log::trace!("rejected {mv}: leaves {color} king on {king} attacked");
                continue;
            }
            legal.push(mv);
        }
        legal
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_color)
    }

    /// Whether `mv` is one of the legal moves for its mover.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        match self.board.color_on(mv.from()) {
            Some(color) => self.legal_moves_for(color).as_slice().contains(mv),
            None => false,
        }
    }
}
