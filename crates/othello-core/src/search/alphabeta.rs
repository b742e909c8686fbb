//! Depth-limited alpha-beta search with optional move ordering.

use std::cmp::Reverse;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval;
use crate::move_list::Move;
use crate::search::node_kind::{MaxNode, NodeKind};
use crate::search::search_context::SearchContext;
use crate::types::{Depth, Score};

/// Runs an alpha-beta search from the root position with open bounds.
///
/// # Arguments
/// * `ctx` - Search context holding the perspective color, cache and
///   the ordering flag.
/// * `board` - The root position.
/// * `depth` - Remaining depth budget; negative means unlimited.
///
/// # Returns
/// The selected move and its backed-up value. The value is identical
/// to what minimax returns at the same depth; only the visited node
/// count (and the move chosen among equal-valued ties) may differ.
pub fn root(ctx: &mut SearchContext, board: &Board, depth: Depth) -> (Move, Score) {
    node::<MaxNode>(ctx, board, -SCORE_INF, SCORE_INF, depth)
}

/// Evaluates one node of the alpha-beta tree.
///
/// Terminal and cache handling match minimax. The prune test compares
/// the running best value against the opposing bound: a max node stops
/// expanding siblings once `best >= beta`, a min node once
/// `alpha >= best`, each tightening its own bound with the running best
/// value after the test. The prune compares against the running best
/// value, not the freshly tightened bound.
fn node<NT: NodeKind>(
    ctx: &mut SearchContext,
    board: &Board,
    mut alpha: Score,
    mut beta: Score,
    depth: Depth,
) -> (Move, Score) {
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

    // Expand all children up front so ordering can score them under
    // the parent's fixed perspective.
    let mut children: Vec<(Move, Board)> = moves
        .iter()
        .map(|mv| {
            let child = board.apply_move(side, mv);
            (mv, child)
        })
        .collect();
    if ctx.ordering {
        // Most promising first for the maximizer, most damaging first
        // for the minimizer. The sort is stable, so equal-valued moves
        // keep their enumeration order.
        if NT::MAXIMIZING {
            children.sort_by_key(|(_, child)| Reverse(eval::utility(child, ctx.color)));
        } else {
            children.sort_by_key(|(_, child)| eval::utility(child, ctx.color));
        }
    }

    let mut best_move = Move::NONE;
    let mut best_score = if NT::MAXIMIZING {
        -SCORE_INF
    } else {
        SCORE_INF
    };
    for (mv, child) in &children {
        let (_, value) = node::<NT::Flip>(ctx, child, alpha, beta, depth - 1);
        if NT::MAXIMIZING {
            if value > best_score {
                best_score = value;
                best_move = *mv;
            }
            if best_score >= beta {
                break;
            }
            alpha = alpha.max(best_score);
        } else {
            if value < best_score {
                best_score = value;
                best_move = *mv;
            }
            if alpha >= best_score {
                break;
            }
            beta = beta.min(best_score);
        }
    }

    ctx.store(board, best_move, best_score);
    (best_move, best_score)
}
