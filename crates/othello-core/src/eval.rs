//! Positional evaluation: material, stability, mobility, phase weights.

use crate::board::Board;
use crate::disc::Disc;
use crate::types::Score;

/// Weight triple applied to the three evaluation signals.
///
/// Which triple applies depends on how much of the board is filled:
/// stability dominates throughout, mobility matters most while the
/// board is open, and material gains weight once the game is nearly
/// decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageWeights {
    /// Weight on the disc-count difference.
    pub material: Score,
    /// Weight on the corner/edge stability score.
    pub stability: Score,
    /// Weight on the legal-move-count difference.
    pub mobility: Score,
}

/// Weights while at most a third of the board is filled.
pub const OPENING_WEIGHTS: StageWeights = StageWeights {
    material: 10,
    stability: 1000,
    mobility: 10,
};

/// Weights between one and two thirds filled.
pub const MIDGAME_WEIGHTS: StageWeights = StageWeights {
    material: 10,
    stability: 1000,
    mobility: 5,
};

/// Weights once more than two thirds of the board is filled.
pub const ENDGAME_WEIGHTS: StageWeights = StageWeights {
    material: 50,
    stability: 1000,
    mobility: 1,
};

/// Computes the utility of a position for `color`.
///
/// This is the disc-count difference, the exact value used at terminal
/// nodes and depth-limit cutoffs.
///
/// # Arguments
/// * `board` - The position to evaluate.
/// * `color` - The perspective color.
pub fn utility(board: &Board, color: Disc) -> Score {
    let (dark, light) = board.score();
    match color {
        Disc::Dark => dark as Score - light as Score,
        _ => light as Score - dark as Score,
    }
}

/// Scores positional stability for `color`.
///
/// Corners are worth 50 each. Every own disc on an edge adds 5 per
/// scan that visits it; the four edges are scanned independently, so a
/// corner disc is seen by both its row and its column scan. Discs
/// forming a contiguous same-color run from an owned corner along
/// either of its edges add 5 more each, since such runs can never be
/// flipped.
pub fn stability(board: &Board, color: Disc) -> Score {
    let n = board.size();
    let last = n - 1;
    let mut stable: Score = 0;

    // Corners
    for (col, row) in [(0, 0), (last, 0), (0, last), (last, last)] {
        if board.get(col, row) == color {
            stable += 50;
        }
    }

    // Edges
    for i in 0..n {
        if board.get(i, 0) == color {
            stable += 5;
        }
        if board.get(i, last) == color {
            stable += 5;
        }
        if board.get(0, i) == color {
            stable += 5;
        }
        if board.get(last, i) == color {
            stable += 5;
        }
    }

    // Runs connected to an owned corner along each edge cannot be
    // flipped; each run stops at the first non-matching cell.
    if board.get(0, 0) == color {
        stable += 5 * edge_run(board, color, 0, 1, 0, 1); // down the left edge
        stable += 5 * edge_run(board, color, 1, 0, 1, 0); // along the top edge
    }
    if board.get(last, 0) == color {
        stable += 5 * edge_run(board, color, last, 1, 0, 1);
        stable += 5 * edge_run(board, color, last - 1, 0, -1, 0);
    }
    if board.get(0, last) == color {
        stable += 5 * edge_run(board, color, 0, last - 1, 0, -1);
        stable += 5 * edge_run(board, color, 1, last, 1, 0);
    }
    if board.get(last, last) == color {
        stable += 5 * edge_run(board, color, last, last - 1, 0, -1);
        stable += 5 * edge_run(board, color, last - 1, last, -1, 0);
    }

    stable
}

/// Counts the contiguous run of `color` discs starting at `(col, row)`
/// and walking in direction `(dc, dr)` until the first non-matching
/// cell or the board edge.
fn edge_run(board: &Board, color: Disc, col: u8, row: u8, dc: i32, dr: i32) -> Score {
    let n = board.size() as i32;
    let mut c = col as i32;
    let mut r = row as i32;
    let mut run = 0;
    while c >= 0 && c < n && r >= 0 && r < n && board.get(c as u8, r as u8) == color {
        run += 1;
        c += dc;
        r += dr;
    }
    run
}

/// Computes the legal-move-count difference for `color`.
pub fn mobility(board: &Board, color: Disc) -> Score {
    let dark = board.legal_moves(Disc::Dark).count() as Score;
    let light = board.legal_moves(Disc::Light).count() as Score;
    match color {
        Disc::Dark => dark - light,
        _ => light - dark,
    }
}

/// Selects the weight triple for the current game phase.
///
/// The phase is the fraction of the board already occupied: at most a
/// third filled is the opening, up to two thirds the midgame, beyond
/// that the endgame.
pub fn stage_weights(board: &Board) -> StageWeights {
    let total = board.total_cells();
    let taken = board.filled();
    if 3 * taken <= total {
        OPENING_WEIGHTS
    } else if 3 * taken <= 2 * total {
        MIDGAME_WEIGHTS
    } else {
        ENDGAME_WEIGHTS
    }
}

/// Computes the blended heuristic value of a position for `color`.
///
/// Material, stability and mobility are combined under the current
/// stage weights. When either side has no legal move the game is
/// effectively forced, and the heuristic degenerates to the plain
/// utility so the blend cannot distort near-terminal values.
pub fn heuristic(board: &Board, color: Disc) -> Score {
    let value = utility(board, color);
    if !board.has_legal_moves(color) || !board.has_legal_moves(color.opposite()) {
        return value;
    }
    let weights = stage_weights(board);
    value * weights.material
        + stability(board, color) * weights.stability
        + mobility(board, color) * weights.mobility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_list::Move;

    #[test]
    fn test_utility_is_antisymmetric() {
        let board = Board::new(8).apply_move(Disc::Dark, Move::new(3, 2));
        assert_eq!(utility(&board, Disc::Dark), 3);
        assert_eq!(utility(&board, Disc::Light), -3);
    }

    #[test]
    fn test_stability_counts_corner_and_edges() {
        // A lone dark disc in the top-left corner: 50 for the corner,
        // 5 from the top-row scan, 5 from the left-column scan. The
        // corner-adjacent cells are empty, so both corner runs count 0.
        let board = Board::from_string(
            "X---\
             ----\
             ----\
             --O-",
        );
        assert_eq!(stability(&board, Disc::Dark), 60);
    }

    #[test]
    fn test_stability_corner_run() {
        // Dark owns the top-left corner plus two discs down the left
        // edge: corner 50, edge scans 4 * 5 = 20 (three left-column
        // cells plus the corner seen again by the top-row scan), and a
        // corner run of two discs down the edge for 10 more.
        let board = Board::from_string(
            "X---\
             X---\
             X---\
             ---O",
        );
        assert_eq!(stability(&board, Disc::Dark), 80);
    }

    #[test]
    fn test_stage_weights_progression() {
        let opening = Board::new(8);
        assert_eq!(stage_weights(&opening), OPENING_WEIGHTS);

        let midgame = Board::from_string(
            "XXXX\
             XOO-\
             ----\
             ----",
        );
        assert_eq!(stage_weights(&midgame), MIDGAME_WEIGHTS);

        let endgame = Board::from_string(
            "XXXX\
             XOOO\
             OOOX\
             XX--",
        );
        assert_eq!(stage_weights(&endgame), ENDGAME_WEIGHTS);
    }

    #[test]
    fn test_heuristic_blends_signals() {
        let board = Board::new(4);
        let expected = utility(&board, Disc::Dark) * OPENING_WEIGHTS.material
            + stability(&board, Disc::Dark) * OPENING_WEIGHTS.stability
            + mobility(&board, Disc::Dark) * OPENING_WEIGHTS.mobility;
        assert_eq!(heuristic(&board, Disc::Dark), expected);
    }

    #[test]
    fn test_heuristic_gates_to_utility_without_moves() {
        // Dark cannot move anywhere, Light can play (3,3).
        let board = Board::from_string(
            "X---\
             -O--\
             --X-\
             ----",
        );
        assert!(board.legal_moves(Disc::Dark).is_empty());
        assert!(!board.legal_moves(Disc::Light).is_empty());
        assert_eq!(heuristic(&board, Disc::Dark), utility(&board, Disc::Dark));
        assert_eq!(heuristic(&board, Disc::Dark), 1);
    }
}
