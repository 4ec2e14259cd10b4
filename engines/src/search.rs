//! Move selection: candidate enumeration, ranking, and a shallow
//! selectively-pruned adversarial look-ahead.
//!
//! Algorithm:
//! - Enumerate every legal move for the side to move and rank the list
//!   descending by [`move_score`]
//! - Look-ahead-evaluate the best third of the ranked list: apply the
//!   candidate on a trial copy, rank the opponent's replies and follow the
//!   best fifth of them, then the best fourth of the own counter-replies,
//!   recursing until the configured depth is spent; each ply keeps the
//!   maximum score it saw
//! - Track a running best over the examined candidates; exact score ties
//!   are broken by a fair coin from the caller-supplied random source
//!
//! The fractional branching factors bound search cost instead of a timer;
//! they are configuration, not hard-coded ratios. The search is stateless
//! between invocations and only ever mutates value copies of the position.

use othello::{Cell, Coord, Player, Rules, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heuristic::move_score;

/// Look-ahead depth and branching fractions for [`select_move`].
///
/// A divisor of `n` means "examine the best `len / n` entries of the ranked
/// list" (integer division; the root always examines at least the top
/// candidate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Remaining own/opponent exchanges to explore below the root move.
    pub depth: u32,
    /// Fraction of the ranked root candidates to look ahead on.
    pub root_divisor: usize,
    /// Fraction of the opponent's ranked replies to follow.
    pub reply_divisor: usize,
    /// Fraction of the own ranked counter-replies to follow.
    pub counter_divisor: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 2,
            root_divisor: 3,
            reply_divisor: 5,
            counter_divisor: 4,
        }
    }
}

/// Whose stone the move under evaluation places.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Ply {
    /// The searching player's own candidate move.
    Own,
    /// An opponent reply under consideration.
    Opponent,
}

/// Every legal move for `color`, in row-major board order.
///
/// Unlike [`Rules::has_legal_move`] this builds the complete candidate list:
/// each empty cell that captures in at least one direction appears exactly
/// once.
pub fn possible_moves(rules: &Rules, color: Player) -> Vec<Coord> {
    let mut moves = Vec::new();
    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            let location = Coord::new(x, y);
            if rules.stone_at(location) == Cell::Empty && rules.is_legal_move(location, color) {
                moves.push(location);
            }
        }
    }
    moves
}

/// Legal moves for `color` ranked descending by [`move_score`].
///
/// Scores are computed once per candidate; the sort is stable, so equal
/// scores keep their board-order relative position.
pub fn ranked_moves(rules: &Rules, color: Player) -> Vec<Coord> {
    let mut scored: Vec<(Coord, i32)> = possible_moves(rules, color)
        .into_iter()
        .map(|place| (place, move_score(rules, color, place)))
        .collect();
    scored.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    scored.into_iter().map(|(place, _)| place).collect()
}

/// Depth-limited look-ahead value of playing `place`.
///
/// One recursive function covers both sides of the exchange, parameterized
/// by whose stone `place` puts down. An own move contributes its heuristic
/// score and then follows the opponent's best replies; an opponent reply
/// contributes nothing itself and follows the searching player's best
/// counter-replies. Each ply returns the maximum score it examined. All
/// speculation happens on a cloned position.
fn evaluate_move(
    rules: &Rules,
    player: Player,
    place: Coord,
    ply: Ply,
    depth: u32,
    config: &SearchConfig,
) -> i32 {
    let mut trial = rules.clone();

    match ply {
        Ply::Own => {
            let mut score = move_score(rules, player, place);
            let _ = trial.place_stone(place, player);

            if depth > 0 {
                let replies = ranked_moves(&trial, player.opponent());
                let examined = replies.len() / config.reply_divisor;
                for &reply in replies.iter().take(examined) {
                    let branch =
                        evaluate_move(&trial, player, reply, Ply::Opponent, depth - 1, config);
                    if branch > score {
                        score = branch;
                    }
                }
            }
            score
        }
        Ply::Opponent => {
            let _ = trial.place_stone(place, player.opponent());

            let counters = ranked_moves(&trial, player);
            let examined = counters.len() / config.counter_divisor;
            let mut score = 0;
            for (i, &counter) in counters.iter().take(examined).enumerate() {
                let branch = evaluate_move(&trial, player, counter, Ply::Own, depth, config);
                if i == 0 || branch > score {
                    score = branch;
                }
            }
            score
        }
    }
}

/// Pick a move for `color`.
///
/// Ranks all legal moves, look-ahead-evaluates the best third (always at
/// least the top-ranked candidate) and returns the best-scoring one. Exact
/// ties are resolved by a coin flip from `rng`, so equally good moves vary
/// between invocations; inject a seeded generator for reproducible play.
///
/// # Panics
/// Panics if `color` has no legal move. Callers must consult
/// [`Rules::has_legal_move`] or the game's turn state first.
pub fn select_move<R: Rng>(
    rules: &Rules,
    color: Player,
    config: &SearchConfig,
    rng: &mut R,
) -> Coord {
    let ranked = ranked_moves(rules, color);
    assert!(
        !ranked.is_empty(),
        "select_move called with no legal moves for {:?}",
        color
    );

    let mut best = ranked[0];
    let mut best_score = evaluate_move(rules, color, best, Ply::Own, config.depth, config);

    let examined = ranked.len() / config.root_divisor;
    for &candidate in ranked.iter().take(examined).skip(1) {
        let score = evaluate_move(rules, color, candidate, Ply::Own, config.depth, config);
        if score > best_score || (score == best_score && rng.gen_bool(0.5)) {
            best = candidate;
            best_score = score;
        }
    }

    best
}

/// Convenience entry point: default configuration, fresh entropy-seeded
/// random source per call. Returns `None` when `color` has no legal move.
pub fn compute_move(rules: &Rules, color: Player) -> Option<Coord> {
    if !rules.has_legal_move(color) {
        return None;
    }
    let mut rng = StdRng::from_entropy();
    Some(select_move(rules, color, &SearchConfig::default(), &mut rng))
}
