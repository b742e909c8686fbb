//! Game tree search engine.

pub mod alphabeta;
pub mod minimax;
pub mod node_kind;
pub mod search_context;
pub mod search_result;

use crate::board::Board;
use crate::cache::TranspositionCache;
use crate::disc::Disc;
use crate::move_list::Move;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::Depth;

/// Which tree-search algorithm a search dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Plain depth-limited minimax.
    Minimax,
    /// Depth-limited alpha-beta pruning.
    AlphaBeta,
}

/// Configuration for one move selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// The search algorithm to run.
    pub algorithm: Algorithm,
    /// Depth budget; a negative value searches until natural
    /// termination.
    pub depth_limit: Depth,
    /// Whether the transposition cache is consulted and written.
    pub caching: bool,
    /// Whether alpha-beta visits promising children first. Accepted but
    /// without effect under [`Algorithm::Minimax`], where no prune test
    /// exists for ordering to help.
    pub ordering: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            algorithm: Algorithm::AlphaBeta,
            depth_limit: 5,
            caching: true,
            ordering: true,
        }
    }
}

/// Main search engine structure.
///
/// Owns the transposition cache, which persists across the successive
/// move selections of one match so overlapping sub-positions are
/// amortized between turns. Call [`Search::init`] to reset between
/// games.
#[derive(Default)]
pub struct Search {
    cache: TranspositionCache,
}

impl Search {
    /// Creates a new search engine with an empty cache.
    pub fn new() -> Search {
        Search {
            cache: TranspositionCache::new(),
        }
    }

    /// Resets the search state for a new game.
    pub fn init(&mut self) {
        self.cache.clear();
    }

    /// Returns the number of cached positions.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Runs a search on the given board position.
    ///
    /// # Arguments
    /// * `board` - The position to move from. Assumed to be a legal,
    ///   reachable game state; the engine does not validate it.
    /// * `color` - The side to select a move for.
    /// * `options` - Algorithm, depth budget and feature flags.
    ///
    /// # Returns
    /// The selected move, its value, and the visited node count. The
    /// move is [`Move::NONE`] when `color` has no legal move.
    pub fn run(&mut self, board: &Board, color: Disc, options: &SearchOptions) -> SearchResult {
        let mut ctx =
            SearchContext::new(&mut self.cache, color, options.caching, options.ordering);
        let (best_move, score) = match options.algorithm {
            Algorithm::Minimax => minimax::root(&mut ctx, board, options.depth_limit),
            Algorithm::AlphaBeta => alphabeta::root(&mut ctx, board, options.depth_limit),
        };
        SearchResult {
            best_move,
            score,
            n_nodes: ctx.n_nodes,
        }
    }

    /// Selects a move for `color` on `board`.
    ///
    /// This is the single entry point the protocol driver calls once
    /// per turn; the search value is internal and discarded here.
    ///
    /// # Returns
    /// The chosen move, or [`Move::NONE`] when no move is available.
    pub fn select_move(&mut self, board: &Board, color: Disc, options: &SearchOptions) -> Move {
        self.run(board, color, options).best_move
    }
}
