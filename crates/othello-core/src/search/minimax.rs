//! Depth-limited minimax search.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval;
use crate::move_list::Move;
use crate::search::node_kind::{MaxNode, NodeKind};
use crate::search::search_context::SearchContext;
use crate::types::{Depth, Score};

/// Runs a minimax search from the root position.
///
/// # Arguments
/// * `ctx` - Search context holding the perspective color and cache.
/// * `board` - The root position.
/// * `depth` - Remaining depth budget; negative means unlimited.
///
/// # Returns
/// The selected move and its backed-up value.
pub fn root(ctx: &mut SearchContext, board: &Board, depth: Depth) -> (Move, Score) {
    node::<MaxNode>(ctx, board, depth)
}

/// Evaluates one node of the minimax tree.
///
/// A cache hit short-circuits the whole subtree. With no legal move for
/// the acting side or an exhausted depth budget the node is terminal
/// and yields the plain utility under the sentinel move. Otherwise
/// every child is searched one level shallower with the node direction
/// flipped, keeping the extremal value; ties go to the first move in
/// enumeration order.
fn node<NT: NodeKind>(ctx: &mut SearchContext, board: &Board, depth: Depth) -> (Move, Score) {
    ctx.increment_nodes();

    if let Some(entry) = ctx.probe(board) {
        return (entry.best_move, entry.score);
    }

    let side = ctx.acting_color(NT::MAXIMIZING);
    let moves = board.legal_moves(side);
    if moves.is_empty() || depth == 0 {
        let score = eval::utility(board, ctx.color);
        ctx.store(board, Move::NONE, score);
        return (Move::NONE, score);
    }

    let mut best_move = Move::NONE;
    let mut best_score = if NT::MAXIMIZING {
        -SCORE_INF
    } else {
        SCORE_INF
    };
    for mv in &moves {
        let child = board.apply_move(side, mv);
        let (_, value) = node::<NT::Flip>(ctx, &child, depth - 1);
        let improved = if NT::MAXIMIZING {
            value > best_score
        } else {
            value < best_score
        };
        if improved {
            best_score = value;
            best_move = mv;
        }
    }

    ctx.store(board, best_move, best_score);
    (best_move, best_score)
}
