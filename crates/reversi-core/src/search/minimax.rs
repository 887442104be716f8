//! Depth-limited minimax with alpha-beta pruning.

use tracing::trace;

use crate::board::Board;
use crate::search::node_rules::{DeadEnd, NodeRules};
use crate::search::search_context::SearchContext;
use crate::types::{Depth, Score};

/// Searches `node` and returns its value.
///
/// At `depth == 0` the chosen child is stored in `ctx.best_move`; the root is always
/// searched as a maximizing node.
///
/// # Arguments
///
/// * `ctx` - Search context: cutoff depth, counters and the root decision.
/// * `node` - Position to search. Children are generated as independent copies.
/// * `maximizing` - Whether this node takes the largest child value.
/// * `depth` - Ply of `node`, 0 at the root.
/// * `alpha` - Best value the maximizing side is assured of.
/// * `beta` - Best value the minimizing side is assured of.
///
/// # Returns
///
/// The value of `node`. The maximizing branch returns the largest value it saw even
/// when it stops early, so values outside `(alpha, beta)` are bounds. Under
/// [`ClassicRules`](crate::search::node_rules::ClassicRules) an expanded minimizing node
/// is worth 0 whatever its children score, so only cutoff and dead-end values below the
/// root can beat the first root move.
pub fn search<R: NodeRules>(
    ctx: &mut SearchContext,
    node: &Board,
    maximizing: bool,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    ctx.n_nodes += 1;

    if ctx.is_cutoff(depth) {
        return R::evaluate(ctx, node);
    }

    let children = node.legal_moves(R::child_disc(node, maximizing));

    if children.is_empty() {
        return match R::dead_end(ctx, node, maximizing) {
            DeadEnd::Leaf(score) => score,
            DeadEnd::Pass(passed) => {
                search::<R>(ctx, &passed, !maximizing, depth + 1, alpha, beta)
            }
        };
    }

    if maximizing {
        let mut max = Score::MIN;
        let mut best_idx = 0;

        for (i, child) in children.iter().enumerate() {
            let score = search::<R>(ctx, &child.board, false, depth + 1, alpha, beta);
            if depth == 0 {
                trace!(sq = %child.sq, score, "root move");
                ctx.root_scores.push(score);
            }

            max = max.max(score);
            if score > alpha {
                alpha = score;
                best_idx = i;
            }
            if beta <= alpha {
                break;
            }
        }

        if depth == 0 {
            ctx.best_move = children.take(best_idx);
        }

        max
    } else {
        let mut min = Score::MAX;

        for child in children.iter() {
            let score = search::<R>(ctx, &child.board, true, depth + 1, alpha, beta);

            min = min.min(score);
            if score < beta {
                beta = score;
            }
            if R::PRUNE_MINIMIZING && beta <= alpha {
                break;
            }
        }

        if R::MINIMIZING_RETURNS_ZERO { 0 } else { min }
    }
}
