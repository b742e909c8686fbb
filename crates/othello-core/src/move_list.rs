//! Move representation and legal-move containers.

use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::MAX_MOVES;

/// Represents a single move as a (column, row) coordinate pair.
///
/// Columns run left to right and rows top to bottom, both starting at
/// zero. The protocol layer prints moves as `"<col> <row>"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Move {
    /// Column index (0-based).
    pub col: u8,
    /// Row index (0-based).
    pub row: u8,
}

impl Move {
    /// Sentinel returned when a side has no move to make.
    ///
    /// Search returns this at terminal and depth-exhausted nodes. It
    /// collides with the top-left cell coordinate, so callers must never
    /// interpret it as a board position.
    pub const NONE: Move = Move { col: 0, row: 0 };

    /// Creates a new move at the given coordinates.
    #[inline]
    pub fn new(col: u8, row: u8) -> Move {
        Move { col, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.col, self.row)
    }
}

/// Container for all legal moves in a position.
///
/// Moves are kept in board enumeration order (row-major: row outer,
/// column inner). That order is the tie-break order throughout the
/// engine, so it must stay stable.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Creates an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: ArrayVec::new(),
        }
    }

    /// Appends a move, preserving enumeration order.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when the acting side has no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over the moves in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// Returns the moves as a slice.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let mut list = MoveList::new();
        list.push(Move::new(1, 0));
        list.push(Move::new(0, 1));
        list.push(Move::new(3, 2));

        let collected: Vec<Move> = list.iter().collect();
        assert_eq!(
            collected,
            vec![Move::new(1, 0), Move::new(0, 1), Move::new(3, 2)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::new(5, 3)), "5 3");
        assert_eq!(format!("{}", Move::NONE), "0 0");
    }

    #[test]
    fn test_none_sentinel() {
        assert_eq!(Move::NONE, Move::new(0, 0));
        assert!(MoveList::new().is_empty());
    }
}
