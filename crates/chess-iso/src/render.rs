//! Draw requests handed to a renderer.
//!
//! The view never touches pixels. Each frame it describes 64 tiles and the
//! pieces standing on them, and a [`Renderer`] turns those into output.

use crate::config::{Palette, Rgb};
use crate::glyph::Stroke;
use crate::Point;
use chess_core::{Color, Piece, Square};
use serde::Serialize;

/// Fill style of a tile, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStyle {
    /// Destination of the selected piece.
    ValidMove,
    /// Square under the pointer.
    Hover,
    /// Checkerboard square with even `row + col`.
    Light,
    /// Checkerboard square with odd `row + col`.
    Dark,
}

impl TileStyle {
    /// Returns the fill color for this style.
    pub fn color(self, palette: &Palette) -> Rgb {
        match self {
            TileStyle::ValidMove => palette.valid_move,
            TileStyle::Hover => palette.hover,
            TileStyle::Light => palette.light,
            TileStyle::Dark => palette.dark,
        }
    }
}

/// Request to fill and outline one diamond tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawTile {
    pub square: Square,
    pub style: TileStyle,
    /// Closed outline: top, right, bottom, left, top.
    pub outline: [Point; 5],
}

/// Request to draw a piece glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawPiece {
    pub square: Square,
    pub piece: Piece,
    pub color: Color,
    /// Glyph center, already lifted when `raised` is set.
    pub center: Point,
    pub raised: bool,
    pub strokes: Vec<Stroke>,
}

/// Consumer of per-frame draw requests.
pub trait Renderer {
    fn draw_tile(&mut self, tile: &DrawTile);
    fn draw_piece(&mut self, piece: &DrawPiece);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_tile(&mut self, tile: &DrawTile) {
        (**self).draw_tile(tile);
    }

    fn draw_piece(&mut self, piece: &DrawPiece) {
        (**self).draw_piece(piece);
    }
}

/// A renderer that records every request of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub tiles: Vec<DrawTile>,
    pub pieces: Vec<DrawPiece>,
}

impl Frame {
    /// Returns the tile request for `sq`, if one was recorded.
    pub fn tile(&self, sq: Square) -> Option<&DrawTile> {
        self.tiles.iter().find(|t| t.square == sq)
    }

    /// Returns the piece request for `sq`, if one was recorded.
    pub fn piece(&self, sq: Square) -> Option<&DrawPiece> {
        self.pieces.iter().find(|p| p.square == sq)
    }
}

impl Renderer for Frame {
    fn draw_tile(&mut self, tile: &DrawTile) {
        self.tiles.push(tile.clone());
    }

    fn draw_piece(&mut self, piece: &DrawPiece) {
        self.pieces.push(piece.clone());
    }
}
