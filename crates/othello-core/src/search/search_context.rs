//! Per-search bookkeeping shared by both algorithms.

use crate::board::Board;
use crate::cache::{CacheEntry, TranspositionCache};
use crate::disc::Disc;
use crate::move_list::Move;
use crate::types::Score;

/// Mutable state threaded through one move-selection search.
///
/// The perspective color is fixed for the whole search: every node
/// evaluates for it, whichever side is acting. The cache outlives the
/// context (it belongs to the owning [`Search`](crate::search::Search)
/// instance), while the node counter is reset per call.
pub struct SearchContext<'a> {
    cache: &'a mut TranspositionCache,
    /// The color all values in this search are computed for.
    pub color: Disc,
    /// Whether the transposition cache is consulted and written.
    pub caching: bool,
    /// Whether alpha-beta orders children before recursing.
    pub ordering: bool,
    /// Number of nodes visited so far.
    pub n_nodes: u64,
}

impl<'a> SearchContext<'a> {
    /// Creates a context for one top-level search.
    pub fn new(
        cache: &'a mut TranspositionCache,
        color: Disc,
        caching: bool,
        ordering: bool,
    ) -> SearchContext<'a> {
        SearchContext {
            cache,
            color,
            caching,
            ordering,
            n_nodes: 0,
        }
    }

    /// Counts a visited node.
    #[inline]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }

    /// Returns the color acting at a node of the given direction.
    #[inline]
    pub fn acting_color(&self, maximizing: bool) -> Disc {
        if maximizing {
            self.color
        } else {
            self.color.opposite()
        }
    }

    /// Probes the cache for this position, honoring the caching flag.
    pub fn probe(&self, board: &Board) -> Option<CacheEntry> {
        if !self.caching {
            return None;
        }
        self.cache.probe(board, self.color)
    }

    /// Stores a node result, honoring the caching flag.
    ///
    /// The cache itself enforces write-once semantics per key.
    pub fn store(&mut self, board: &Board, best_move: Move, score: Score) {
        if self.caching {
            self.cache.store(board.clone(), self.color, best_move, score);
        }
    }
}
