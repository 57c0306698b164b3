use super::{CastleSide, CheckStatus, Color, GameState, Move, Piece, PieceKind, Square};

/// Rook squares (from, to) for a castle whose king lands on `king_to`.
#[inline]
fn castle_rook_squares(king_to: Square, side: CastleSide) -> (Square, Square) {
    let rook_to_file = (king_to.1 as isize - side.direction()) as usize;
    (
        Square(king_to.0, side.rook_file()),
        Square(king_to.0, rook_to_file),
    )
}

/// Castling side whose right a rook on `sq` guards, if `sq` is a home corner.
#[inline]
fn corner_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.0 != color.back_rank() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_file() == sq.1)
}

impl GameState {
    /// Play `mv` in place. The move must have been generated for this position.
    ///
    /// # Panics
    /// Panics if the source square is empty, or a castle finds no rook.
    pub(crate) fn make_move(&mut self, mv: &Move) {
        let mut piece: Piece = self
            .board
            .take(mv.from)
            .expect("make_move: source square has no piece");
        let mover = piece.color;

        if let Some(victim) = mv.captured {
            self.board.take(victim.square);
        }

        piece.times_moved += 1;
        self.board.put(mv.to, piece);

        if let Some(side) = mv.castle_side() {
            let (rook_from, rook_to) = castle_rook_squares(mv.to, side);
            let mut rook = self
                .board
                .take(rook_from)
                .expect("tried to castle without a rook");
            rook.times_moved += 1;
            self.board.put(rook_to, rook);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1))
        } else {
            None
        };

        match piece.kind {
            PieceKind::King => self.castling.remove_color(mover),
            PieceKind::Rook => {
                if let Some(side) = corner_side(mover, mv.from) {
                    self.castling.remove(mover, side);
                }
            }
            _ => {}
        }
        if let Some(victim) = mv.captured {
            if victim.kind == PieceKind::Rook {
                if let Some(side) = corner_side(victim.color, victim.square) {
                    self.castling.remove(victim.color, side);
                }
            }
        }

        if piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        self.active_color = mover.opponent();
        self.checks = [CheckStatus::None; 2];
    }

    /// Take back `mv`, which must be the last move made on this state.
    ///
    /// # Panics
    /// Panics if the destination square is empty, or a castle finds no rook.
    pub(crate) fn unmake_move(&mut self, mv: &Move) {
        let mut piece = self
            .board
            .take(mv.to)
            .expect("unmake_move: destination square has no piece");
        let mover = piece.color;

        piece.times_moved -= 1;
        self.board.put(mv.from, piece);

        if let Some(side) = mv.castle_side() {
            let (rook_from, rook_to) = castle_rook_squares(mv.to, side);
            let mut rook = self
                .board
                .take(rook_to)
                .expect("tried to uncastle without a rook");
            rook.times_moved -= 1;
            self.board.put(rook_from, rook);
        }

        if let Some(victim) = mv.captured {
            self.board.put(victim.square, victim);
        }

        let prior = mv.prior;
        self.en_passant = prior.en_passant;
        self.castling = prior.castling;
        self.halfmove_clock = prior.halfmove_clock;
        self.checks = prior.checks;
        if mover == Color::Black {
            self.fullmove_number -= 1;
        }
        self.active_color = mover;
    }

    /// The position after `mv`, leaving `self` untouched.
    ///
    /// Stored check statuses are reset; use [`GameState::commit`] to have
    /// them recomputed.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> GameState {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    /// The position before `mv`, given the position right after it.
    #[must_use]
    pub fn undo_move(&self, mv: &Move) -> GameState {
        let mut prev = self.clone();
        prev.unmake_move(mv);
        prev
    }

    /// Apply `mv` and recompute the stored check statuses.
    #[must_use]
    pub fn commit(&self, mv: &Move) -> GameState {
        let mut next = self.apply_move(mv);
        next.refresh_checks();

        #[cfg(feature = "logging")]
        log::debug!(
            "committed {mv}; {} to move ({})",
            next.active_color,
            next.status_of(next.active_color)
        );

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_rook_squares_for_castles() {
        assert_eq!(
            castle_rook_squares(sq("g1"), CastleSide::King),
            (sq("h1"), sq("f1"))
        );
        assert_eq!(
            castle_rook_squares(sq("c8"), CastleSide::Queen),
            (sq("a8"), sq("d8"))
        );
    }

    #[test]
    fn test_corner_side() {
        assert_eq!(corner_side(Color::White, sq("a1")), Some(CastleSide::Queen));
        assert_eq!(corner_side(Color::White, sq("h1")), Some(CastleSide::King));
        assert_eq!(corner_side(Color::White, sq("h8")), None);
        assert_eq!(corner_side(Color::Black, sq("h8")), Some(CastleSide::King));
        assert_eq!(corner_side(Color::Black, sq("e8")), None);
    }

    #[test]
    fn test_make_unmake_in_place_restores() {
        let mut state = GameState::new();
        let original = state.clone();
        let mv = state.legal_moves().find(sq("g1"), sq("f3")).unwrap();
        state.make_move(&mv);
        assert_eq!(state.active_color(), Color::Black);
        assert_eq!(state.halfmove_clock(), 1);
        assert_eq!(state.board().piece_at(sq("f3")).unwrap().times_moved, 1);
        state.unmake_move(&mv);
        assert_eq!(state, original);
    }

    #[test]
    #[should_panic(expected = "source square has no piece")]
    fn test_make_from_empty_square_panics() {
        let mut state = GameState::new();
        let mv = state.legal_moves().find(sq("e2"), sq("e4")).unwrap();
        state.make_move(&mv);
        // e2 is now empty
        state.make_move(&mv);
    }

    #[test]
    #[should_panic(expected = "castle without a rook")]
    fn test_castle_without_rook_panics() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let mv = state.legal_moves().find(sq("e1"), sq("g1")).unwrap();
        state.board.take(sq("h1"));
        state.make_move(&mv);
    }

    #[test]
    fn test_commit_refreshes_status() {
        let state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let mv = state.legal_moves().find(sq("a1"), sq("a8")).unwrap();
        let applied = state.apply_move(&mv);
        assert_eq!(applied.status_of(Color::Black), CheckStatus::None);
        let committed = state.commit(&mv);
        assert_eq!(committed.status_of(Color::Black), CheckStatus::Checkmate);
        assert!(committed.is_game_over());
    }
}
