//! Heuristic move evaluation.
//!
//! [`move_score`] values a hypothetical placement as the sum of:
//! 1. Positional value of the square: corners and edges are scored by
//!    whether the square is connected along its edge to a corner by an
//!    unbroken run of own stones (strong bonus) or of opponent stones
//!    (strong penalty); other edge squares get a moderate bonus and
//!    interior squares nothing
//! 2. minus the mover's liberties after the trial placement (empty squares
//!    touching the mover's stones are exposure, not strength)
//! 3. plus the mover's legal-move count after the trial placement
//! 4. minus the opponent's legal-move count after the trial placement
//!
//! All trial placements run on a value copy of the rules state; the caller's
//! position is never touched.

use othello::{Cell, Coord, Player, Rules, BOARD_SIZE, DIRECTIONS};

use crate::search::possible_moves;

/// Edge square connected to a corner by the mover's own stones.
pub const EDGE_ANCHORED_BONUS: i32 = 40;
/// Edge square connected to a corner by opponent stones.
pub const EDGE_ANCHORED_PENALTY: i32 = -20;
/// Any other edge square.
pub const EDGE_BONUS: i32 = 20;

/// Heuristic value of placing `color` at `place`.
///
/// Candidates are pre-screened by the caller; an illegal placement leaves
/// the trial board untouched and scores on the unchanged position.
pub fn move_score(rules: &Rules, color: Player, place: Coord) -> i32 {
    let mut score = evaluate_location(rules, place, color);

    let mut trial = rules.clone();
    let _ = trial.place_stone(place, color);

    // Avoid empty squares around our own stones
    score -= count_liberties(&trial, color) as i32;
    // Maximize our moves, deny the opponent theirs
    score += possible_moves(&trial, color).len() as i32;
    score -= possible_moves(&trial, color.opponent()).len() as i32;

    score
}

/// Positional value of `place` on the board as it stands, before the stone
/// is put down. Corners and edges dominate; the interior is neutral.
pub fn evaluate_location(rules: &Rules, place: Coord, color: Player) -> i32 {
    let size = BOARD_SIZE as i32;

    if place.y == 0 {
        return edge_score(rules, color, |t| Coord::new(t, 0), place.x);
    }
    if place.y == size - 1 {
        return edge_score(rules, color, |t| Coord::new(t, size - 1), place.x);
    }
    if place.x == 0 {
        return edge_score(rules, color, |t| Coord::new(0, t), place.y);
    }
    if place.x == size - 1 {
        return edge_score(rules, color, |t| Coord::new(size - 1, t), place.y);
    }

    0
}

/// Score a square at position `p` along one board edge, where `at` maps a
/// position on the edge to its coordinate.
///
/// An unbroken run of own stones from either corner up to `p` is worth the
/// anchored bonus; corners satisfy this vacuously. A non-empty unbroken run
/// of opponent stones from either corner is the anchored penalty. Anything
/// else on the edge is the plain edge bonus.
fn edge_score(rules: &Rules, color: Player, at: impl Fn(i32) -> Coord, p: i32) -> i32 {
    let size = BOARD_SIZE as i32;
    let own = color.to_cell();
    let enemy = color.opponent().to_cell();

    if (0..p).all(|t| rules.stone_at(at(t)) == own)
        || ((p + 1)..size).all(|t| rules.stone_at(at(t)) == own)
    {
        return EDGE_ANCHORED_BONUS;
    }
    if (p > 0 && (0..p).all(|t| rules.stone_at(at(t)) == enemy))
        || (p < size - 1 && ((p + 1)..size).all(|t| rules.stone_at(at(t)) == enemy))
    {
        return EDGE_ANCHORED_PENALTY;
    }

    EDGE_BONUS
}

/// Number of liberties for `color`: empty squares adjacent (in any of the 8
/// directions) to at least one of that color's stones.
pub fn count_liberties(rules: &Rules, color: Player) -> usize {
    let own = color.to_cell();
    let mut liberties = 0;

    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            let location = Coord::new(x, y);
            if rules.stone_at(location) != Cell::Empty {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&dir| rules.stone_at(location.step(dir)) == own)
            {
                liberties += 1;
            }
        }
    }

    liberties
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello::Board;

    fn position(stones: &[(i32, i32, Cell)]) -> Rules {
        let mut cells = [Cell::Empty; 64];
        for &(x, y, cell) in stones {
            cells[(x + y * 8) as usize] = cell;
        }
        Rules::from_board(Board::from_cells(cells), false)
    }

    #[test]
    fn test_corners_get_anchored_bonus() {
        let rules = Rules::new();
        for corner in [(0, 0), (7, 0), (0, 7), (7, 7)] {
            assert_eq!(
                evaluate_location(&rules, Coord::new(corner.0, corner.1), Player::Black),
                EDGE_ANCHORED_BONUS
            );
        }
    }

    #[test]
    fn test_interior_squares_are_neutral() {
        let rules = Rules::new();
        assert_eq!(evaluate_location(&rules, Coord::new(2, 4), Player::Black), 0);
        assert_eq!(evaluate_location(&rules, Coord::new(5, 3), Player::White), 0);
    }

    #[test]
    fn test_plain_edge_square() {
        let rules = Rules::new();
        assert_eq!(
            evaluate_location(&rules, Coord::new(3, 0), Player::Black),
            EDGE_BONUS
        );
        assert_eq!(
            evaluate_location(&rules, Coord::new(0, 4), Player::White),
            EDGE_BONUS
        );
    }

    #[test]
    fn test_edge_run_to_corner_scores_bonus() {
        // Own stones from the left corner up to (3,0)
        let rules = position(&[
            (0, 0, Cell::Black),
            (1, 0, Cell::Black),
            (2, 0, Cell::Black),
        ]);
        assert_eq!(
            evaluate_location(&rules, Coord::new(3, 0), Player::Black),
            EDGE_ANCHORED_BONUS
        );
        // Broken run falls back to the plain edge bonus
        let broken = position(&[(0, 0, Cell::Black), (2, 0, Cell::Black)]);
        assert_eq!(
            evaluate_location(&broken, Coord::new(3, 0), Player::Black),
            EDGE_BONUS
        );
    }

    #[test]
    fn test_edge_run_from_far_corner_scores_bonus() {
        // Own stones from the right corner back to (4,0)
        let rules = position(&[
            (7, 0, Cell::White),
            (6, 0, Cell::White),
            (5, 0, Cell::White),
        ]);
        assert_eq!(
            evaluate_location(&rules, Coord::new(4, 0), Player::White),
            EDGE_ANCHORED_BONUS
        );
    }

    #[test]
    fn test_edge_run_of_opponent_scores_penalty() {
        let rules = position(&[
            (0, 0, Cell::White),
            (1, 0, Cell::White),
            (2, 0, Cell::White),
        ]);
        assert_eq!(
            evaluate_location(&rules, Coord::new(3, 0), Player::Black),
            EDGE_ANCHORED_PENALTY
        );
    }

    #[test]
    fn test_penalty_applies_on_every_edge() {
        // Bottom edge, opponent run anchored at the right corner
        let rules = position(&[
            (7, 7, Cell::White),
            (6, 7, Cell::White),
        ]);
        assert_eq!(
            evaluate_location(&rules, Coord::new(5, 7), Player::Black),
            EDGE_ANCHORED_PENALTY
        );
        // Left edge, opponent run anchored at the top corner
        let left = position(&[(0, 0, Cell::Black), (0, 1, Cell::Black)]);
        assert_eq!(
            evaluate_location(&left, Coord::new(0, 2), Player::White),
            EDGE_ANCHORED_PENALTY
        );
    }

    #[test]
    fn test_count_liberties_initial_board() {
        let rules = Rules::new();
        // The four center stones of either color touch 10 empty squares
        assert_eq!(count_liberties(&rules, Player::Black), 10);
        assert_eq!(count_liberties(&rules, Player::White), 10);
    }

    #[test]
    fn test_count_liberties_lone_stone() {
        let rules = position(&[(0, 0, Cell::Black)]);
        assert_eq!(count_liberties(&rules, Player::Black), 3);
        assert_eq!(count_liberties(&rules, Player::White), 0);
    }

    #[test]
    fn test_move_score_combines_terms() {
        let rules = Rules::new();
        let place = Coord::new(5, 3);

        // Recompute the sum by hand from the published pieces
        let mut trial = rules.clone();
        trial.place_stone(place, Player::Black).unwrap();
        let expected = evaluate_location(&rules, place, Player::Black)
            - count_liberties(&trial, Player::Black) as i32
            + possible_moves(&trial, Player::Black).len() as i32
            - possible_moves(&trial, Player::White).len() as i32;

        assert_eq!(move_score(&rules, Player::Black, place), expected);
    }

    #[test]
    fn test_move_score_does_not_mutate_input() {
        let rules = Rules::new();
        let before = rules.clone();
        let _ = move_score(&rules, Player::Black, Coord::new(5, 3));
        assert_eq!(rules, before);
    }
}
