//! A game in progress: the canonical position plus the moves that led to it.

use crate::board::{
    CheckReport, CheckStatus, Color, FenError, GameState, Move, MoveList, MoveParseError,
};

/// Owner of the current position and its move history.
///
/// Proposed moves from outside are checked against the legal move list
/// here; the position types themselves assume their inputs are legal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::from_state(GameState::try_from_fen(fen)?))
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.active_color()
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.state.legal_moves()
    }

    /// Play a move, rejecting anything not legal for the side to move.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveParseError> {
        let legal = self.state.legal_moves();
        if !legal.as_slice().contains(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.state = self.state.commit(mv);
        self.history.push(*mv);
        Ok(())
    }

    /// Play a move given in coordinate notation such as "e2e4".
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.state.parse_move(notation)?;
        self.state = self.state.commit(&mv);
        self.history.push(mv);
        Ok(mv)
    }

    /// Take back the last move, returning it. `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.state = self.state.undo_move(&mv);
        Some(mv)
    }

    /// Stored status of the side to move.
    #[must_use]
    pub fn status(&self) -> CheckStatus {
        self.state.status_of(self.side_to_move())
    }

    #[must_use]
    pub fn check_status(&self, color: Color) -> CheckReport {
        self.state.check_status(color)
    }

    /// True after checkmate or stalemate.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_game_over()
    }
}
