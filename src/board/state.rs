use super::movegen::MoveGenContext;
use super::{Board, CastlingRights, CheckReport, CheckStatus, Color, MoveList, PriorState, Square};

/// A full position: placement plus the bookkeeping the rules depend on.
///
/// Moves change it through [`GameState::apply_move`] and
/// [`GameState::commit`]; [`GameState::undo_move`] restores every field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_color: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) checks: [CheckStatus; 2],
}

impl GameState {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            active_color: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            checks: [CheckStatus::None; 2],
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Stored status of one side, as of the last refresh.
    #[inline]
    #[must_use]
    pub fn status_of(&self, color: Color) -> CheckStatus {
        self.checks[color.index()]
    }

    /// Snapshot of the bookkeeping a move will overwrite.
    #[inline]
    pub(crate) fn prior(&self) -> PriorState {
        PriorState {
            en_passant: self.en_passant,
            castling: self.castling,
            halfmove_clock: self.halfmove_clock,
            checks: self.checks,
        }
    }

    /// Generator inputs for `color` in this position.
    ///
    /// `in_check` only gates castling, so it is evaluated only when castles
    /// are requested.
    #[must_use]
    pub fn move_context(&self, color: Color, include_castles: bool) -> MoveGenContext {
        MoveGenContext {
            prior: self.prior(),
            in_check: include_castles && self.board.is_in_check(color),
            include_castles,
        }
    }

    /// Pseudo-legal moves for `color`, castling candidates included.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        self.board
            .pseudo_legal_moves(color, &self.move_context(color, true))
    }

    /// Whether `color`'s king is attacked right now.
    ///
    /// # Panics
    /// Panics if the color has no king.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Classify `color`'s position from scratch.
    #[must_use]
    pub fn status_for(&self, color: Color) -> CheckStatus {
        let check = self.is_in_check(color);
        let moves_left = self.legal_moves_for(color).len();
        CheckStatus::from_parts(check, moves_left)
    }

    /// Check, checkmate and stalemate flags for `color`, computed on demand.
    #[must_use]
    pub fn check_status(&self, color: Color) -> CheckReport {
        self.status_for(color).into()
    }

    /// Recompute the stored statuses: the side to move gets its real
    /// status, the side that just moved is never left in check.
    pub fn refresh_checks(&mut self) {
        let mover = self.active_color;
        let status = self.status_for(mover);

        #[cfg(feature = "logging")]
        if status != self.checks[mover.index()] {
            log::debug!("{mover} status changed to {status}");
        }

        self.checks[mover.index()] = status;
        self.checks[mover.opponent().index()] = CheckStatus::None;
    }

    /// True once the side to move is mated or stalemated.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status_of(self.active_color).is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_starting_position() {
        let state = GameState::new();
        assert_eq!(state.active_color(), Color::White);
        assert_eq!(state.castling(), CastlingRights::all());
        assert_eq!(state.en_passant(), None);
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
        assert_eq!(state.status_of(Color::White), CheckStatus::None);
        assert_eq!(*state.board(), Board::starting());
    }

    #[test]
    fn test_prior_snapshots_bookkeeping() {
        let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 7 20");
        let prior = state.prior();
        assert_eq!(prior.en_passant, Some("d6".parse().unwrap()));
        assert_eq!(prior.halfmove_clock, 7);
        assert_eq!(prior.castling, CastlingRights::none());
    }

    #[test]
    fn test_context_skips_check_lookup_without_castles() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(state.move_context(Color::White, true).in_check);
        assert!(!state.move_context(Color::White, false).in_check);
    }

    #[test]
    fn test_check_status_flags() {
        // Back rank mate
        let mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        let report = mated.check_status(Color::Black);
        assert!(report.check && report.checkmate && !report.stalemate);
        assert!(mated.is_game_over());

        let stale = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let report = stale.check_status(Color::Black);
        assert!(!report.check && !report.checkmate && report.stalemate);

        let check = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
        assert_eq!(check.status_for(Color::Black), CheckStatus::Check);
        assert!(!check.is_game_over());
    }

    #[test]
    fn test_refresh_clears_mover_status() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
        state.checks[Color::White.index()] = CheckStatus::Check;
        state.refresh_checks();
        assert_eq!(state.status_of(Color::Black), CheckStatus::Check);
        assert_eq!(state.status_of(Color::White), CheckStatus::None);
    }
}
