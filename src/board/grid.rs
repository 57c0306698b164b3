use std::fmt;

use super::{Color, Piece, PieceKind, Square};

/// Result of checking a destination square for a piece of a given color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareCheck {
    /// Empty or holding an opposing piece
    pub valid: bool,
    /// The opposing piece that would be captured
    pub capture: Option<Piece>,
}

/// 8×8 grid of optional pieces, indexed `[rank][file]`.
///
/// Every stored piece carries the square of the cell that holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial layout with every piece unmoved.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            for (file, kind) in back_rank.iter().enumerate() {
                let sq = Square(color.back_rank(), file);
                board.put(sq, Piece::new(color, *kind, sq));
                let pawn_sq = Square(color.pawn_start_rank(), file);
                board.put(pawn_sq, Piece::new(color, PieceKind::Pawn, pawn_sq));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Write a piece into a cell, stamping the cell's square into it.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, mut piece: Piece) {
        piece.square = sq;
        self.cells[sq.0][sq.1] = Some(piece);
    }

    /// Remove and return whatever occupies a cell.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1].take()
    }

    /// Probe a square as a destination for a piece of `color`.
    ///
    /// # Panics
    /// Panics if the square lies outside the board.
    #[must_use]
    pub fn check_square(&self, sq: Square, color: Color) -> SquareCheck {
        assert!(
            sq.0 < 8 && sq.1 < 8,
            "tried to validate a position outside of the board: rank {} file {}",
            sq.0,
            sq.1
        );
        match self.piece_at(sq) {
            None => SquareCheck {
                valid: true,
                capture: None,
            },
            Some(piece) if piece.color != color => SquareCheck {
                valid: true,
                capture: Some(piece),
            },
            Some(_) => SquareCheck {
                valid: false,
                capture: None,
            },
        }
    }

    /// All pieces in storage order (top-left first).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    /// Square of a color's king.
    ///
    /// # Panics
    /// Panics if the color has no king on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => panic!("no king found for {color}"),
        }
    }

    /// Number of pieces of a kind and color
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|piece| piece.kind == kind).count()
    }

    /// True when every stored piece's square matches its cell.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Square::ALL
            .iter()
            .all(|&sq| self.piece_at(sq).map_or(true, |piece| piece.square == sq))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in 0..8 {
            write!(f, "{} |", 8 - rank)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square(rank, file))
                    .map_or(' ', |piece| piece.fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
