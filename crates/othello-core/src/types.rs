//! Common type aliases used throughout the engine.

/// Remaining search depth budget. Negative values mean "no depth limit".
pub type Depth = i32;

/// Evaluation score (disc difference, or a weighted heuristic blend).
pub type Score = i32;
