//! Sliding pieces: bishop, rook, and queen.

use chess_core::{Board, Color, Square};

/// Diagonal directions, in generation order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal directions, in generation order.
pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walks each direction outward from `from` until the edge or a blocker.
///
/// Empty squares are destinations and the walk continues. An occupied
/// square ends the walk in that direction and is a destination only when
/// it holds an enemy piece.
pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Bishop destinations from `from` for a piece of `color`.
pub fn bishop_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    slide(board, from, color, &DIAGONALS, &mut moves);
    moves
}

/// Rook destinations from `from` for a piece of `color`.
pub fn rook_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    slide(board, from, color, &ORTHOGONALS, &mut moves);
    moves
}

/// Queen destinations: every bishop destination, then every rook destination.
pub fn queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = bishop_moves(board, from, color);
    slide(board, from, color, &ORTHOGONALS, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn rook_on_empty_board() {
        let board = Board::empty();
        let moves = rook_moves(&board, sq("d4"), Color::White);
        assert_eq!(moves.len(), 14);
        // down the file first, then up, then left, then right
        assert_eq!(&moves[..3], &[sq("d3"), sq("d2"), sq("d1")]);
        assert_eq!(moves[3], sq("d5"));
        assert_eq!(*moves.last().unwrap(), sq("h4"));
    }

    #[test]
    fn bishop_on_empty_board_corner() {
        let board = Board::empty();
        let moves = bishop_moves(&board, sq("a1"), Color::Black);
        let expected: Vec<Square> = (1..8).map(|i| Square::at(i, i)).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn slide_stops_at_own_piece() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R2R4").unwrap();
        let moves = rook_moves(&board, sq("a1"), Color::White);
        assert!(moves.contains(&sq("b1")));
        assert!(moves.contains(&sq("c1")));
        assert!(!moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("e1")));
    }

    #[test]
    fn slide_captures_enemy_and_stops() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R2r4").unwrap();
        let moves = rook_moves(&board, sq("a1"), Color::White);
        assert!(moves.contains(&sq("d1")));
        assert!(!moves.contains(&sq("e1")));
    }

    #[test]
    fn queen_is_bishop_then_rook() {
        let board = Board::from_placement("8/1p6/8/3Q4/8/5P2/8/3r4").unwrap();
        let from = sq("d5");
        let mut expected = bishop_moves(&board, from, Color::White);
        expected.extend(rook_moves(&board, from, Color::White));
        assert_eq!(queen_moves(&board, from, Color::White), expected);
    }
}
