//! The rules engine: move legality, the stone-flip algorithm (standard and
//! loose variants), whole-board move-possibility scanning and scoring.
//!
//! Flip rule, per compass direction from the placement:
//! - Standard: the run of opponent stones starting at the adjacent cell must
//!   terminate on one of the mover's own stones (a bracket). A run that ends
//!   on an empty cell or off the board captures nothing.
//! - Loose: a direction captures as soon as the adjacent cell holds an
//!   opponent stone, no matter what terminates the run.
//!
//! A placement is legal iff at least one of the 8 directions captures; a
//! legal placement flips the union of all capturing directions' runs.

use crate::{Board, Cell, Coord, GameError, Player, BOARD_SIZE, DIRECTIONS};

/// The board plus the flipping-variant flag, fixed at construction.
///
/// `Clone` is the branch point of the AI search: every speculative line of
/// play runs on a full value copy, never on shared state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub(crate) board: Board,
    loose_flipping: bool,
}

impl Rules {
    /// Standard rules on a fresh starting board.
    pub fn new() -> Self {
        Rules::with_variant(false)
    }

    /// Fresh starting board, choosing the flipping variant.
    pub fn with_variant(loose_flipping: bool) -> Self {
        Rules {
            board: Board::new(),
            loose_flipping,
        }
    }

    /// Wrap an existing board position.
    pub fn from_board(board: Board, loose_flipping: bool) -> Self {
        Rules {
            board,
            loose_flipping,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn loose_flipping(&self) -> bool {
        self.loose_flipping
    }

    /// Cell state at `location`; empty for out-of-range coordinates.
    pub fn stone_at(&self, location: Coord) -> Cell {
        self.board.stone_at(location)
    }

    /// Place a stone of `color` at `location` and flip every captured run.
    ///
    /// Fails with no state change if the cell is occupied or if no direction
    /// captures under the active variant.
    pub fn place_stone(&mut self, location: Coord, color: Player) -> Result<(), GameError> {
        if !self.is_legal_move(location, color) {
            return Err(GameError::InvalidMove);
        }
        self.board.set_stone(location, color)?;
        for dir in DIRECTIONS {
            self.flip_direction(location, dir, color)?;
        }
        Ok(())
    }

    /// True if placing `color` at `location` would capture in at least one
    /// direction. The cell must be empty and on the board.
    pub fn is_legal_move(&self, location: Coord, color: Player) -> bool {
        location.on_board()
            && self.stone_at(location) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&dir| self.captures_in_direction(location, dir, color))
    }

    /// Scan the board in row-major order for the first empty cell where
    /// `color` has a legal placement. Existence check only, used for turn
    /// advancement; it does not enumerate moves.
    pub fn has_legal_move(&self, color: Player) -> bool {
        for y in 0..BOARD_SIZE as i32 {
            for x in 0..BOARD_SIZE as i32 {
                let location = Coord::new(x, y);
                if self.stone_at(location) == Cell::Empty && self.is_legal_move(location, color) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of cells currently holding `color`.
    pub fn score_of(&self, color: Player) -> usize {
        self.board.count(color.to_cell())
    }

    /// Would a stone of `color` at `origin` capture along `dir`?
    fn captures_in_direction(&self, origin: Coord, dir: Coord, color: Player) -> bool {
        let enemy = color.opponent().to_cell();
        let mut next = origin.step(dir);

        // The adjacent cell must hold an opponent stone in either variant.
        if self.stone_at(next) != enemy {
            return false;
        }
        if self.loose_flipping {
            return true;
        }

        // Standard variant: walk past the opponent run and require it to
        // terminate on an own stone. An empty cell or the board edge ends
        // the scan with no capture.
        while self.stone_at(next) == enemy {
            next = next.step(dir);
        }
        self.stone_at(next) == color.to_cell()
    }

    /// Flip the captured run along `dir`, if that direction captures.
    /// Stones are flipped from the far end of the run back toward `origin`.
    fn flip_direction(&mut self, origin: Coord, dir: Coord, color: Player) -> Result<(), GameError> {
        if !self.captures_in_direction(origin, dir, color) {
            return Ok(());
        }

        let enemy = color.opponent().to_cell();
        let mut run = Vec::new();
        let mut next = origin.step(dir);
        while self.stone_at(next) == enemy {
            run.push(next);
            next = next.step(dir);
        }
        for &location in run.iter().rev() {
            self.board.flip_stone(location)?;
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
