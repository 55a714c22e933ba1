//! Isometric chessboard interaction.
//!
//! This crate sits between an input source and a renderer:
//! - [`IsoProjection`] maps squares to diamond tiles on screen and back
//! - [`GameView`] tracks hover and selection and asks the move generator
//!   for destinations when a piece is picked
//! - [`Renderer`] receives per-frame [`DrawTile`] / [`DrawPiece`] requests
//! - [`run_frame`] is one step of the single-threaded control loop
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_iso::{GameView, ViewConfig};
//!
//! let mut view = GameView::new(&ViewConfig::default());
//! let knight = view.projection().board_to_screen(Square::at(0, 1));
//! view.pointer_down(knight.x, knight.y);
//! assert_eq!(view.valid_moves(), &[Square::at(2, 0), Square::at(2, 2)]);
//! ```

pub mod config;
pub mod glyph;
mod input;
mod projection;
pub mod render;
mod view;

pub use config::{ConfigError, Palette, Rgb, ViewConfig};
pub use input::{run_frame, FrameOutcome, InputEvent, InputSource};
pub use projection::{IsoProjection, Point};
pub use render::{DrawPiece, DrawTile, Frame, Renderer, TileStyle};
pub use view::{GameView, Selection};
