use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastleSide, CastlingRights, Color, GameState, Move, Piece, PieceKind, Square};

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(layout: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                file += run as usize;
            } else {
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::RankWidth {
                        rank: 8 - rank,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square(rank, file);
                board.put(sq, Piece::placed(color, kind, sq));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth {
                rank: 8 - rank,
                files: file,
            });
        }
    }

    for color in Color::BOTH {
        let found = board.count(color, PieceKind::King);
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::King),
            'Q' => (Color::White, CastleSide::Queen),
            'k' => (Color::Black, CastleSide::King),
            'q' => (Color::Black, CastleSide::Queen),
            _ => return Err(FenError::InvalidCastling { char: c }),
        };
        rights.set(color, side);
    }
    Ok(rights)
}

/// `-`, or a square on the third or sixth rank.
fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    match field.parse::<Square>() {
        Ok(sq) if sq.0 == 2 || sq.0 == 5 => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_counter(field: &'static str, token: &str) -> Result<u32, FenError> {
    token.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: token.to_string(),
    })
}

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// The en-passant field, halfmove clock and fullmove number are optional.
    /// A single trailing number is read as the fullmove number. Check
    /// statuses are computed before returning.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = parse_castling(parts[2])?;

        let mut rest = &parts[3..];
        let mut en_passant = None;
        if let Some(&field) = rest.first() {
            if field.parse::<u32>().is_err() {
                en_passant = parse_en_passant(field)?;
                rest = &rest[1..];
            }
        }

        let (halfmove_clock, fullmove_number) = match rest {
            [] => (0, 1),
            [full] => (0, parse_counter("fullmove number", full)?),
            [half, full] => (
                parse_counter("halfmove clock", half)?,
                parse_counter("fullmove number", full)?,
            ),
            [_, _, extra, ..] => {
                return Err(FenError::InvalidCounter {
                    field: "trailing field",
                    found: (*extra).to_string(),
                })
            }
        };
        if fullmove_number == 0 {
            return Err(FenError::InvalidCounter {
                field: "fullmove number",
                found: "0".to_string(),
            });
        }

        let mut state = GameState {
            board,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            checks: Default::default(),
        };
        state.refresh_checks();

        #[cfg(feature = "logging")]
        log::debug!(
            "parsed FEN {fen:?}: {active_color} to move, {}",
            state.status_of(active_color)
        );

        Ok(state)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(state) => state,
            Err(err) => panic!("Invalid FEN string {fen:?}: {err}"),
        }
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.board.piece_at(Square(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.active_color.to_fen_char(),
            self.castling.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4") and match it
    /// against the legal moves of the side to move.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let state = GameState::new();
    /// let mv = state.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[..2].parse().map_err(|_| invalid())?;
        let to: Square = notation[2..].parse().map_err(|_| invalid())?;

        self.legal_moves()
            .find(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}
