//! Move generation for an 8x8 board.
//!
//! This crate proposes destination squares; it never changes the board.
//! Moves are pseudo-legal: a king may step into check, and there is no
//! notion of whose turn it is.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Square};
//! use chess_engine::generate_moves;
//!
//! let board = Board::initial();
//! let moves = generate_moves(&board, Square::at(0, 1));
//! assert_eq!(moves, vec![Square::at(2, 0), Square::at(2, 2)]);
//! ```

pub mod movegen;

pub use movegen::{
    bishop_moves, generate_moves, is_destination, king_moves, knight_moves, pawn_moves,
    queen_moves, rook_moves,
};
