//! The 8x8 board and its initial layout.

use crate::{Color, Piece, Square};

/// Contents of a single square: a piece and its owner, or nothing.
pub type Cell = Option<(Piece, Color)>;

/// An 8x8 grid of squares, each holding at most one piece.
///
/// The board is read-only once built: it can be constructed from the
/// standard layout or from a placement string, and then only queried.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Placement string of the standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting layout: White on rows 0-1, Black on
    /// rows 6-7, rows 2-5 empty.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, piece) in Piece::BACK_ROW.into_iter().enumerate() {
                board.cells[back][col] = Some((piece, color));
                board.cells[pawns][col] = Some((Piece::Pawn, color));
            }
        }
        board
    }

    /// Builds a board from explicit cells, row 0 first.
    pub(crate) const fn from_cells(cells: [[Cell; 8]; 8]) -> Self {
        Board { cells }
    }

    /// Returns the piece and color on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if no piece stands on the given square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(_, color)| color)
    }

    /// Iterates over every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(piece, color)| (sq, piece, color)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..8u8).rev() {
            for col in 0..8u8 {
                let c = match self.piece_at(Square::at(row, col)) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
