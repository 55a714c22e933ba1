//! Core types for chess.
//!
//! This crate provides the fundamental types used across the workspace:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates, always on the board
//! - [`Board`], the 8x8 grid with its standard starting layout
//! - Placement string parsing and serialization

mod board;
mod color;
mod piece;
mod placement;
mod square;

pub use board::{Board, Cell};
pub use color::Color;
pub use piece::Piece;
pub use placement::PlacementError;
pub use square::{on_board, Square, BOARD_SIZE};
