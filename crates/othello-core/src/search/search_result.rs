//! Final outcome of a move-selection search.

use crate::move_list::Move;
use crate::types::Score;

/// Result of one top-level search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The selected move, or [`Move::NONE`] when the position is
    /// terminal for the acting side.
    pub best_move: Move,
    /// The backed-up value of `best_move` for the searched color.
    pub score: Score,
    /// Number of nodes visited by this search.
    pub n_nodes: u64,
}
