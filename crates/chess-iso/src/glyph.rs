//! Abstract piece glyphs.
//!
//! Each piece is described as a handful of filled or stroked shapes around
//! its center. Renderers rasterize these however they like; sizes scale
//! with the tile height.

use crate::config::{Palette, Rgb};
use crate::Point;
use chess_core::{Color, Piece};
use serde::Serialize;

/// Height of the rook battlements and offset of crown details, in pixels.
const DETAIL: i32 = 6;

/// Which palette entry a shape is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ink {
    /// The piece's own color.
    Body,
    /// Dark detail drawn over the body.
    Accent,
}

impl Ink {
    /// Resolves the ink to a concrete color for a piece of `color`.
    pub fn resolve(self, color: Color, palette: &Palette) -> Rgb {
        match (self, color) {
            (Ink::Accent, _) => palette.accent,
            (Ink::Body, Color::White) => palette.white_piece,
            (Ink::Body, Color::Black) => palette.black_piece,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Filled circle.
    Disc { center: Point, radius: i32 },
    /// Filled axis-aligned ellipse.
    Ellipse { center: Point, rx: i32, ry: i32 },
    /// Filled axis-aligned rectangle between two corners.
    Rect { min: Point, max: Point },
    /// Filled polygon.
    Polygon { points: Vec<Point> },
    /// Open line strip.
    Polyline { points: Vec<Point> },
    /// Single line segment.
    Line { from: Point, to: Point },
}

/// A shape with the ink it is painted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stroke {
    pub ink: Ink,
    pub shape: Shape,
}

impl Stroke {
    fn body(shape: Shape) -> Self {
        Stroke {
            ink: Ink::Body,
            shape,
        }
    }

    fn accent(from: Point, to: Point) -> Self {
        Stroke {
            ink: Ink::Accent,
            shape: Shape::Line { from, to },
        }
    }
}

/// Returns the shapes making up `piece`, centered on `center`, in paint order.
pub fn glyph(piece: Piece, center: Point, tile_height: i32) -> Vec<Stroke> {
    let Point { x: cx, y: cy } = center;
    let at = |dx: i32, dy: i32| Point::new(cx + dx, cy + dy);

    match piece {
        Piece::Pawn => vec![Stroke::body(Shape::Disc {
            center,
            radius: tile_height / 4,
        })],
        Piece::Rook => {
            let half = tile_height / 4;
            let quarter = half / 2;
            vec![
                Stroke::body(Shape::Rect {
                    min: at(-half, -half),
                    max: at(half, half),
                }),
                Stroke::body(Shape::Polyline {
                    points: vec![
                        at(-half, -half),
                        at(-quarter, -half - DETAIL),
                        at(0, -half),
                        at(quarter, -half - DETAIL),
                        at(half, -half),
                    ],
                }),
            ]
        }
        Piece::Knight => {
            let q = tile_height / 4;
            vec![Stroke::body(Shape::Polygon {
                points: vec![at(-q, q), at(0, -q), at(q, 0)],
            })]
        }
        Piece::Bishop => {
            let rx = tile_height / 6;
            let ry = tile_height / 3;
            vec![
                Stroke::body(Shape::Ellipse { center, rx, ry }),
                Stroke::accent(at(-rx / 2, -ry / 2), at(rx / 2, ry / 2)),
            ]
        }
        Piece::Queen => {
            let r = tile_height / 3;
            let top = -tile_height / 2;
            vec![
                Stroke::body(Shape::Disc { center, radius: r }),
                Stroke::accent(at(0, -r), at(0, top)),
                Stroke::accent(at(0, top), at(-DETAIL, top + 8)),
                Stroke::accent(at(0, top), at(DETAIL, top + 8)),
            ]
        }
        Piece::King => {
            let r = tile_height / 3;
            let top = -tile_height / 2;
            vec![
                Stroke::body(Shape::Disc { center, radius: r }),
                Stroke::accent(at(0, top), at(0, -r)),
                Stroke::accent(at(-DETAIL, top + 8), at(DETAIL, top + 8)),
            ]
        }
    }
}
