//! Global constants

use crate::types::{Depth, Score};

/// Largest supported board edge length.
pub const MAX_BOARD_SIZE: usize = 16;

/// Smallest supported board edge length.
pub const MIN_BOARD_SIZE: usize = 4;

/// Maximum number of legal moves a position can hold.
pub const MAX_MOVES: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Infinity score for search algorithm bounds.
///
/// Strictly larger than any reachable utility or heuristic magnitude.
pub const SCORE_INF: Score = 1 << 30;

/// Depth sentinel requesting search until natural termination.
pub const DEPTH_UNLIMITED: Depth = -1;
