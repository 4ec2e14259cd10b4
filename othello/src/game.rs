//! The committed-move wrapper the presentation layer talks to.
//!
//! [`Game`] owns the authoritative [`Rules`] state, tracks whose turn it is,
//! detects the end of the game and records the diff of the single most
//! recent committed move so a view can animate exactly the cells that
//! changed. The boundary addresses squares by linear row-major index.

use crate::{coord_to_index, index_to_coord, Cell, Player, Rules, BOARD_SIZE};

/// What the last committed move changed on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveDiff {
    /// Color of the placed stone.
    pub color: Player,
    /// Linear index of the placed stone.
    pub placed: usize,
    /// Linear indices of every stone the move flipped.
    pub flipped: Vec<usize>,
}

/// A running game: rules state plus turn tracking.
///
/// The turn is `None` once neither side has a legal move; that is the only
/// terminal marker, derived from the rules' move-possibility scan rather
/// than stored redundantly.
#[derive(Clone, Debug)]
pub struct Game {
    rules: Rules,
    turn: Option<Player>,
    last_change: Option<MoveDiff>,
}

impl Game {
    /// Start a standard-rules game. Black moves first.
    pub fn new() -> Self {
        Game::with_variant(false)
    }

    /// Start a game under the chosen flipping variant.
    pub fn with_variant(loose_flipping: bool) -> Self {
        Game {
            rules: Rules::with_variant(loose_flipping),
            turn: Some(Player::Black),
            last_change: None,
        }
    }

    /// Commit the current side's stone at the given linear index.
    ///
    /// Returns `false`, changing nothing, if the game is over or the
    /// placement is illegal. On success records the move diff and advances
    /// the turn: the opponent moves next if it can, otherwise the same side
    /// keeps the turn, otherwise the game is over.
    pub fn commit_move(&mut self, index: usize) -> bool {
        let Some(color) = self.turn else {
            return false;
        };
        if index >= BOARD_SIZE * BOARD_SIZE {
            return false;
        }

        let before = self.rules.board().to_cells();
        if self.rules.place_stone(index_to_coord(index), color).is_err() {
            return false;
        }

        let after = self.rules.board().to_cells();
        let flipped = (0..after.len())
            .filter(|&i| i != index && before[i] != after[i])
            .collect();
        self.last_change = Some(MoveDiff {
            color,
            placed: index,
            flipped,
        });

        self.advance_turn(color);
        true
    }

    /// Active player, or `None` when the game is over.
    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_none()
    }

    /// Stone count for `color`.
    pub fn score(&self, color: Player) -> usize {
        self.rules.score_of(color)
    }

    /// Cell state at a linear index.
    pub fn piece_at(&self, index: usize) -> Cell {
        self.rules.stone_at(index_to_coord(index))
    }

    /// Row-major snapshot of the board for view refreshes.
    pub fn board_cells(&self) -> [Cell; BOARD_SIZE * BOARD_SIZE] {
        self.rules.board().to_cells()
    }

    /// Diff of the most recent committed move, if any.
    pub fn last_change(&self) -> Option<&MoveDiff> {
        self.last_change.as_ref()
    }

    /// Read access to the rules state, e.g. to hand the position to the AI.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Winner by stone count, `None` while running or on a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        let black = self.score(Player::Black);
        let white = self.score(Player::White);
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Back to the starting position, keeping the variant.
    pub fn reset(&mut self) {
        let loose = self.rules.loose_flipping();
        self.rules = Rules::with_variant(loose);
        self.turn = Some(Player::Black);
        self.last_change = None;
    }

    fn advance_turn(&mut self, mover: Player) {
        let next = mover.opponent();
        if self.rules.has_legal_move(next) {
            self.turn = Some(next);
        } else if self.rules.has_legal_move(mover) {
            self.turn = Some(mover);
        } else {
            self.turn = None;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
