//! Pseudo-legal move generation.
//!
//! Destinations respect the board edges and same-color occupancy and allow
//! captures of enemy pieces. King safety is never checked, and castling,
//! en passant and promotion do not exist. Output order is fixed by the
//! offset and direction tables in the submodules.

mod sliders;
mod steppers;

use chess_core::{Board, Piece, Square};

pub use sliders::{bishop_moves, queen_moves, rook_moves, slide, DIAGONALS, ORTHOGONALS};
pub use steppers::{king_moves, knight_moves, pawn_moves, KING_OFFSETS, KNIGHT_OFFSETS};

/// Generates the destination squares for the piece standing on `from`.
///
/// Returns an empty list when `from` is empty.
pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some((piece, color)) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece {
        Piece::Pawn => pawn_moves(board, from, color),
        Piece::Knight => knight_moves(board, from, color),
        Piece::Bishop => bishop_moves(board, from, color),
        Piece::Rook => rook_moves(board, from, color),
        Piece::Queen => queen_moves(board, from, color),
        Piece::King => king_moves(board, from, color),
    }
}

/// Returns true if the piece on `from` can reach `to`.
pub fn is_destination(board: &Board, from: Square, to: Square) -> bool {
    generate_moves(board, from).contains(&to)
}
