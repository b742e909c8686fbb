//! Write-once transposition cache for search results.

use rapidhash::fast::RapidHashMap;

use crate::board::Board;
use crate::disc::Disc;
use crate::move_list::Move;
use crate::types::Score;

/// Cache key: a position together with the perspective color.
///
/// The color is the perspective the value was computed for, not the
/// side to move. Search alternates the acting side implicitly while
/// every node of one search evaluates for the same fixed color, so the
/// key must pin that color explicitly.
pub type CacheKey = (Board, Disc);

/// A cached search outcome for one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// The move selected at this node (`Move::NONE` at terminal nodes).
    pub best_move: Move,
    /// The backed-up search value.
    pub score: Score,
}

/// Maps positions to previously computed search results.
///
/// The cache lives for a whole match (across successive move
/// selections) so recurring sub-positions are amortized between turns.
/// Entries are write-once: the first store for a key wins and later
/// stores are ignored. There is no eviction and no size bound; for a
/// single match on supported board sizes the growth is acceptable, and
/// resetting between games goes through [`TranspositionCache::clear`].
#[derive(Default)]
pub struct TranspositionCache {
    table: RapidHashMap<CacheKey, CacheEntry>,
}

impl TranspositionCache {
    /// Creates an empty cache.
    pub fn new() -> TranspositionCache {
        TranspositionCache {
            table: RapidHashMap::default(),
        }
    }

    /// Looks up the cached result for a position and perspective color.
    ///
    /// # Returns
    /// * `Some(entry)` - If a result was stored for this exact key.
    /// * `None` - On a miss.
    pub fn probe(&self, board: &Board, color: Disc) -> Option<CacheEntry> {
        self.table.get(&(board.clone(), color)).copied()
    }

    /// Stores a search result unless the key is already present.
    ///
    /// # Arguments
    /// * `board` - The evaluated position.
    /// * `color` - The perspective color the value was computed for.
    /// * `best_move` - The selected move (`Move::NONE` at terminals).
    /// * `score` - The backed-up value.
    pub fn store(&mut self, board: Board, color: Disc, best_move: Move, score: Score) {
        self.table
            .entry((board, color))
            .or_insert(CacheEntry { best_move, score });
    }

    /// Removes all entries, e.g. between games.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns the number of cached positions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` when no position is cached.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
