//! Piece placement strings (the first field of FEN).
//!
//! Ranks are listed from rank 8 (row 7) down to rank 1 (row 0),
//! separated by `/`. Digits count consecutive empty squares.

use crate::{Board, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: usize },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: usize, squares: u32 },
}

impl Board {
    /// Parses a placement string such as [`Board::STARTPOS`].
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut cells = [[None; 8]; 8];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - i;
            let row = rank - 1;
            let mut squares = 0u32;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += skip;
                } else if let Some(cell) = Piece::from_fen_char(c) {
                    if squares < 8 {
                        cells[row][squares as usize] = Some(cell);
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { character: c, rank });
                }
                if squares > 8 {
                    return Err(PlacementError::InvalidSquareCount { rank, squares });
                }
            }
            if squares != 8 {
                return Err(PlacementError::InvalidSquareCount { rank, squares });
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// Serializes the board to a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::at(row, col)) {
                    Some((piece, color)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn startpos_matches_initial() {
        let parsed = Board::from_placement(Board::STARTPOS).unwrap();
        assert_eq!(parsed, Board::initial());
        assert_eq!(Board::initial().to_placement(), Board::STARTPOS);
    }

    #[test]
    fn parse_sparse_position() {
        let board = Board::from_placement("8/8/8/3q4/4N3/8/8/8").unwrap();
        assert_eq!(
            board.piece_at(Square::at(4, 3)),
            Some((Piece::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::at(3, 4)),
            Some((Piece::Knight, Color::White))
        );
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(board.to_placement(), "8/8/8/3q4/4N3/8/8/8");
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(PlacementError::InvalidRankCount(3))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7x"),
            Err(PlacementError::InvalidCharacter {
                character: 'x',
                rank: 1
            })
        );
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/09"),
            Err(PlacementError::InvalidCharacter { character: '0', .. })
        ));
    }

    #[test]
    fn wrong_square_count() {
        assert_eq!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidSquareCount { rank: 8, squares: 7 })
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/44p"),
            Err(PlacementError::InvalidSquareCount { rank: 1, squares: 9 })
        );
    }
}
