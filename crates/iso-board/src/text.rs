//! Plain-text renderer: one character pair per square, rank 8 on top.

use chess_core::Square;
use chess_iso::{DrawPiece, DrawTile, Renderer, TileStyle};
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    marker: char,
}

/// Collects one frame into an 8x8 grid of text cells.
///
/// Pieces show as their FEN letter and empty squares as `.`. The marker
/// after each glyph is `*` for a destination, `+` for the hovered square,
/// and blank otherwise.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cells: [[Cell; 8]; 8],
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer {
            cells: [[Cell {
                glyph: '.',
                marker: ' ',
            }; 8]; 8],
        }
    }
}

impl TextRenderer {
    fn cell(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Formats the collected grid with rank and file labels.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        for row in (0..8).rev() {
            let _ = write!(out, "{} ", row + 1);
            for cell in &self.cells[row] {
                out.push(cell.glyph);
                out.push(cell.marker);
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl Renderer for TextRenderer {
    fn draw_tile(&mut self, tile: &DrawTile) {
        self.cell(tile.square).marker = match tile.style {
            TileStyle::ValidMove => '*',
            TileStyle::Hover => '+',
            TileStyle::Light | TileStyle::Dark => ' ',
        };
    }

    fn draw_piece(&mut self, piece: &DrawPiece) {
        self.cell(piece.square).glyph = piece.piece.to_fen_char(piece.color);
    }
}
