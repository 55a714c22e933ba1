//! Isometric projection between board squares and screen pixels.
//!
//! Increasing row moves a tile down and to the right on screen, increasing
//! col moves it down and to the left. The whole diamond grid is centered in
//! the viewport.

use crate::ViewConfig;
use chess_core::{Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// A pixel position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Precomputed board-to-screen mapping for one viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoProjection {
    half_width: i32,
    half_height: i32,
    origin_x: i32,
    origin_y: i32,
}

impl IsoProjection {
    /// Builds the projection for a validated configuration.
    pub fn new(config: &ViewConfig) -> Self {
        let half_width = config.tile_width / 2;
        let half_height = config.tile_height / 2;
        let span = 2 * BOARD_SIZE as i32;
        let board_width = span * half_width;
        let board_height = span * half_height;
        let x_offset = (config.screen_width - board_width) / 2;
        let y_offset = (config.screen_height - board_height) / 2;

        IsoProjection {
            half_width,
            half_height,
            origin_x: board_width / 2 + x_offset,
            origin_y: half_height + y_offset,
        }
    }

    /// Returns the screen position of the center of `sq`'s diamond.
    #[inline]
    pub fn board_to_screen(&self, sq: Square) -> Point {
        let row = sq.row() as i32;
        let col = sq.col() as i32;
        Point {
            x: (row - col) * self.half_width + self.origin_x,
            y: (row + col) * self.half_height + self.origin_y,
        }
    }

    /// Returns the square whose diamond contains the pixel `(x, y)`.
    ///
    /// The inverse transform is solved in real numbers and rounded to the
    /// nearest square, which is then accepted only if it is on the board
    /// and the point lies inside its diamond.
    pub fn screen_to_board(&self, x: i32, y: i32) -> Option<Square> {
        let mx = (x as i64 - self.origin_x as i64) as f32;
        let my = (y as i64 - self.origin_y as i64) as f32;
        let across = mx / self.half_width as f32;
        let down = my / self.half_height as f32;
        let row = ((down + across) / 2.0 + 0.5).floor();
        let col = ((down - across) / 2.0 + 0.5).floor();

        let sq = Square::new(row as i32, col as i32)?;
        self.contains(sq, Point::new(x, y)).then_some(sq)
    }

    /// Returns true if `point` lies inside or on the edge of `sq`'s diamond.
    pub fn contains(&self, sq: Square, point: Point) -> bool {
        let center = self.board_to_screen(sq);
        let dx = (point.x as i64 - center.x as i64).abs();
        let dy = (point.y as i64 - center.y as i64).abs();
        let hw = self.half_width as i64;
        let hh = self.half_height as i64;
        dx * hh + dy * hw <= hw * hh
    }

    /// Returns the closed diamond outline of `sq`: top, right, bottom, left, top.
    pub fn outline(&self, sq: Square) -> [Point; 5] {
        let c = self.board_to_screen(sq);
        let top = Point::new(c.x, c.y - self.half_height);
        [
            top,
            Point::new(c.x + self.half_width, c.y),
            Point::new(c.x, c.y + self.half_height),
            Point::new(c.x - self.half_width, c.y),
            top,
        ]
    }

    /// Full tile height in pixels.
    #[inline]
    pub fn tile_height(&self) -> i32 {
        self.half_height * 2
    }
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn corner_squares() {
        let p = IsoProjection::default();
        assert_eq!(p.board_to_screen(Square::at(0, 0)), Point::new(500, 325));
        assert_eq!(p.board_to_screen(Square::at(7, 0)), Point::new(850, 500));
        assert_eq!(p.board_to_screen(Square::at(0, 7)), Point::new(150, 500));
        assert_eq!(p.board_to_screen(Square::at(7, 7)), Point::new(500, 675));
    }

    #[test]
    fn viewport_center_resolves_to_e5() {
        let p = IsoProjection::default();
        let e5 = Square::from_algebraic("e5").unwrap();
        assert_eq!(p.screen_to_board(500, 500), Some(e5));
        assert_eq!(e5, Square::at(4, 4));
        // Pure: no hidden state between calls.
        assert_eq!(p.screen_to_board(500, 500), p.screen_to_board(500, 500));
    }

    #[test]
    fn misses_outside_the_board() {
        let p = IsoProjection::default();
        assert_eq!(p.screen_to_board(0, 0), None);
        assert_eq!(p.screen_to_board(999, 999), None);
        assert_eq!(p.screen_to_board(500, 299), None);
        assert_eq!(p.screen_to_board(500, 701), None);
        assert_eq!(p.screen_to_board(99, 500), None);
    }

    #[test]
    fn extreme_coordinates_miss() {
        let p = IsoProjection::default();
        assert_eq!(p.screen_to_board(i32::MIN, i32::MAX), None);
        assert_eq!(p.screen_to_board(i32::MIN, 0), None);
        assert_eq!(p.screen_to_board(i32::MAX, i32::MIN), None);
        assert_eq!(p.screen_to_board(i32::MAX, i32::MAX), None);
        assert!(!p.contains(Square::at(0, 0), Point::new(i32::MIN, i32::MIN)));
    }

    #[test]
    fn edge_pixels_belong_to_the_diamond() {
        let p = IsoProjection::default();
        let a1 = Square::at(0, 0);
        assert_eq!(p.screen_to_board(500, 300), Some(a1));
        assert_eq!(p.screen_to_board(101, 500), Some(Square::at(0, 7)));
    }

    #[test]
    fn corner_of_bounding_box_is_outside() {
        let p = IsoProjection::default();
        let a1 = Square::at(0, 0);
        let c = p.board_to_screen(a1);
        assert!(!p.contains(a1, Point::new(c.x + 40, c.y + 20)));
        assert!(p.contains(a1, Point::new(c.x + 20, c.y + 10)));
        // That corner belongs to the neighbor one row up.
        assert_eq!(p.screen_to_board(c.x + 40, c.y + 20), Some(Square::at(1, 0)));
    }

    #[test]
    fn outline_is_closed_diamond() {
        let p = IsoProjection::default();
        let outline = p.outline(Square::at(0, 0));
        assert_eq!(outline[0], Point::new(500, 300));
        assert_eq!(outline[1], Point::new(550, 325));
        assert_eq!(outline[2], Point::new(500, 350));
        assert_eq!(outline[3], Point::new(450, 325));
        assert_eq!(outline[4], outline[0]);
    }

    #[test]
    fn other_viewport_is_centered() {
        let config = ViewConfig {
            screen_width: 640,
            screen_height: 480,
            tile_width: 64,
            tile_height: 32,
            ..ViewConfig::default()
        };
        let p = IsoProjection::new(&config);
        // Board spans 512x256; top corner of a1 sits at the top of the grid.
        assert_eq!(p.outline(Square::at(0, 0))[0], Point::new(320, 112));
        assert_eq!(p.outline(Square::at(7, 7))[2], Point::new(320, 368));
        assert_eq!(p.tile_height(), 32);
    }

    proptest! {
        #[test]
        fn center_round_trips(row in 0u8..8, col in 0u8..8) {
            let p = IsoProjection::default();
            let sq = Square::at(row, col);
            let c = p.board_to_screen(sq);
            prop_assert_eq!(p.screen_to_board(c.x, c.y), Some(sq));
        }

        #[test]
        fn hit_is_always_contained(x in 0i32..1000, y in 0i32..1000) {
            let p = IsoProjection::default();
            if let Some(sq) = p.screen_to_board(x, y) {
                prop_assert!(p.contains(sq, Point::new(x, y)));
            }
        }

        #[test]
        fn interior_points_hit_their_square(row in 0u8..8, col in 0u8..8, dx in -20i32..=20, dy in -10i32..=10) {
            // |dx|/50 + |dy|/25 < 1 holds strictly inside these bounds.
            prop_assume!(dx.abs() * 25 + dy.abs() * 50 < 1250);
            let p = IsoProjection::default();
            let sq = Square::at(row, col);
            let c = p.board_to_screen(sq);
            prop_assert_eq!(p.screen_to_board(c.x + dx, c.y + dy), Some(sq));
        }
    }
}
