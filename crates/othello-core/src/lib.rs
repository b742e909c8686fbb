//! Core engine for an Othello-playing agent.
//!
//! Given a board position, a perspective color, and a depth budget, the
//! engine selects a move with depth-limited minimax or alpha-beta search,
//! backed by a write-once transposition cache and a phase-weighted
//! positional evaluator. Reading positions from the match protocol and
//! printing chosen moves live in the `cli` crate.

pub mod board;
pub mod cache;
pub mod constants;
pub mod disc;
pub mod eval;
pub mod move_list;
pub mod search;
pub mod types;
