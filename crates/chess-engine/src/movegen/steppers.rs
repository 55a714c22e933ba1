//! Non-sliding pieces: pawn, knight, and king.

use chess_core::{Board, Color, Square};

/// Knight offsets, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King offsets, in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pushes every on-board offset target that is empty or holds an enemy.
fn step(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}

/// Knight destinations from `from` for a piece of `color`.
pub fn knight_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step(board, from, color, &KNIGHT_OFFSETS)
}

/// King destinations from `from` for a piece of `color`.
///
/// Castling and check are not considered.
pub fn king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step(board, from, color, &KING_OFFSETS)
}

/// Pawn destinations from `from` for a pawn of `color`.
///
/// Order: single push, double push from the starting row, capture toward
/// the lower column, capture toward the higher column. No en passant and
/// no promotion.
pub fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&to| board.is_empty(to)) {
        moves.push(one);
        if from.row() == color.pawn_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&to| board.is_empty(to)) {
                moves.push(two);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if board.color_at(target) == Some(color.opposite()) {
                moves.push(target);
            }
        }
    }

    moves
}
