//! Othello board representation as an immutable N×N grid.

use std::fmt;

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::disc::Disc;
use crate::move_list::{Move, MoveList};

/// The eight bracketing directions as (col, row) deltas.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Represents an Othello board of a fixed edge length.
///
/// The board is an immutable value type: applying a move produces a new
/// `Board` and leaves the original untouched. Equality and hashing are
/// structural over the cell contents, which makes a board directly
/// usable as a transposition-cache key regardless of the move sequence
/// that produced it.
///
/// Cells are stored row-major; a coordinate is a (column, row) pair
/// with the origin in the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: Box<[Disc]>,
}

impl Board {
    /// Creates a board in the standard starting position.
    ///
    /// The four center cells hold two discs per color on opposing
    /// diagonals: Light on the NW/SE pair, Dark on the NE/SW pair, with
    /// Dark to move first.
    ///
    /// # Arguments
    /// * `size` - Edge length; must be even and within the supported range.
    ///
    /// # Panics
    /// Panics if `size` is odd or outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: u8) -> Board {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&(size as usize)) && size % 2 == 0,
            "unsupported board size: {size}"
        );
        let n = size as usize;
        let mut cells = vec![Disc::Empty; n * n].into_boxed_slice();
        let m = n / 2;
        cells[(m - 1) * n + (m - 1)] = Disc::Light;
        cells[(m - 1) * n + m] = Disc::Dark;
        cells[m * n + (m - 1)] = Disc::Dark;
        cells[m * n + m] = Disc::Light;
        Board { size, cells }
    }

    /// Creates a board from explicit cell contents.
    ///
    /// # Arguments
    /// * `size` - Edge length.
    /// * `cells` - Row-major cell contents; must hold `size * size` entries.
    ///
    /// # Panics
    /// Panics if the cell count does not match the size.
    pub fn from_cells(size: u8, cells: Vec<Disc>) -> Board {
        assert_eq!(
            cells.len(),
            size as usize * size as usize,
            "cell count does not match board size"
        );
        Board {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Creates a board from a string representation.
    ///
    /// Whitespace is ignored; the remaining characters are read row by
    /// row and interpreted as:
    /// - `'X'` for a dark disc
    /// - `'O'` for a light disc
    /// - `'-'` for an empty cell
    ///
    /// # Panics
    /// Panics if the non-whitespace character count is not a perfect
    /// square of a supported size, or if an unknown character appears.
    pub fn from_string(board_string: &str) -> Board {
        let cells: Vec<Disc> = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Disc::Dark,
                'O' => Disc::Light,
                '-' => Disc::Empty,
                _ => panic!("unexpected board character: {c:?}"),
            })
            .collect();
        let size = cells.len().isqrt();
        assert_eq!(size * size, cells.len(), "board string is not square");
        Board::from_cells(size as u8, cells)
    }

    /// Returns the board edge length.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn total_cells(&self) -> u32 {
        self.size as u32 * self.size as u32
    }

    /// Gets the disc at a coordinate.
    #[inline]
    pub fn get(&self, col: u8, row: u8) -> Disc {
        self.cells[row as usize * self.size as usize + col as usize]
    }

    /// Returns the number of discs of the given color on the board.
    pub fn count(&self, color: Disc) -> u32 {
        self.cells.iter().filter(|&&c| c == color).count() as u32
    }

    /// Returns the disc counts as a `(dark, light)` pair.
    pub fn score(&self) -> (u32, u32) {
        (self.count(Disc::Dark), self.count(Disc::Light))
    }

    /// Returns the number of occupied cells.
    pub fn filled(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Disc::Empty).count() as u32
    }

    /// Walks from `(col, row)` in direction `(dc, dr)` and reports
    /// whether the adjacent run of `color.opposite()` discs is bracketed
    /// by a `color` disc. A legal bracket flips at least one disc.
    fn brackets(&self, color: Disc, col: i32, row: i32, dc: i32, dr: i32) -> bool {
        let n = self.size as i32;
        let mut c = col + dc;
        let mut r = row + dr;
        let mut run = 0;
        while c >= 0 && c < n && r >= 0 && r < n {
            match self.get(c as u8, r as u8) {
                d if d == color.opposite() => run += 1,
                d if d == color => return run > 0,
                _ => return false,
            }
            c += dc;
            r += dr;
        }
        false
    }

    /// Checks whether placing `color` at `mv` is legal.
    pub fn is_legal_move(&self, color: Disc, mv: Move) -> bool {
        if self.get(mv.col, mv.row) != Disc::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dc, dr)| self.brackets(color, mv.col as i32, mv.row as i32, dc, dr))
    }

    /// Enumerates all legal moves for `color`.
    ///
    /// Moves come out in row-major order (row outer, column inner); that
    /// enumeration order is the tie-break order for move selection.
    ///
    /// # Returns
    /// A `MoveList`, possibly empty when the side has no legal move.
    pub fn legal_moves(&self, color: Disc) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let mv = Move::new(col, row);
                if self.is_legal_move(color, mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Returns `true` when `color` has at least one legal move.
    pub fn has_legal_moves(&self, color: Disc) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_legal_move(color, Move::new(col, row)) {
                    return true;
                }
            }
        }
        false
    }

    /// Applies a legal move for `color` and returns the resulting board.
    ///
    /// All bracketed opponent runs are flipped. The receiver is left
    /// unmodified; search relies on that purity for cache correctness.
    ///
    /// # Arguments
    /// * `color` - The acting side.
    /// * `mv` - A move that is legal on this board.
    pub fn apply_move(&self, color: Disc, mv: Move) -> Board {
        debug_assert!(self.is_legal_move(color, mv), "illegal move: {mv}");
        let n = self.size as i32;
        let mut cells = self.cells.clone();
        cells[mv.row as usize * self.size as usize + mv.col as usize] = color;

        for (dc, dr) in DIRECTIONS {
            if !self.brackets(color, mv.col as i32, mv.row as i32, dc, dr) {
                continue;
            }
            let mut c = mv.col as i32 + dc;
            let mut r = mv.row as i32 + dr;
            while c >= 0 && c < n && r >= 0 && r < n {
                let idx = r as usize * self.size as usize + c as usize;
                if cells[idx] != color.opposite() {
                    break;
                }
                cells[idx] = color;
                c += dc;
                r += dr;
            }
        }
        Board { size: self.size, cells }
    }
}

impl Default for Board {
    /// Creates the standard 8×8 starting position.
    fn default() -> Self {
        Board::new(8)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(col, row).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
