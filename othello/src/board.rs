//! The 8x8 board: a pure grid of cells with bounds-safe reads and guarded
//! single writes. All game knowledge (legality, flipping, turns) lives in
//! [`crate::rules`] and above; the board itself only stores cell states.

use crate::{coord_to_index, Cell, Coord, GameError, Player, BOARD_SIZE};

/// An 8x8 grid of cell states, indexed as `cells[y][x]`.
///
/// Value-semantic: the AI's trial searches clone the whole board at every
/// branch point so that speculative mutation can never corrupt the caller's
/// authoritative state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new board with the standard Othello starting pattern:
    /// (3,3) and (4,4) Black, (3,4) and (4,3) White, every other cell empty.
    pub fn new() -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.init();
        board
    }

    /// Reset every cell to empty, then restore the center starting pattern.
    pub fn init(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.cells[3][3] = Cell::Black;
        self.cells[4][4] = Cell::Black;
        self.cells[4][3] = Cell::White;
        self.cells[3][4] = Cell::White;
    }

    /// Build a board from a row-major snapshot (index = x + y*8).
    pub fn from_cells(cells: [Cell; BOARD_SIZE * BOARD_SIZE]) -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        for (index, &cell) in cells.iter().enumerate() {
            board.cells[index / BOARD_SIZE][index % BOARD_SIZE] = cell;
        }
        board
    }

    /// Row-major snapshot of the whole board (index = x + y*8), for the
    /// presentation layer's board queries.
    pub fn to_cells(&self) -> [Cell; BOARD_SIZE * BOARD_SIZE] {
        let mut cells = [Cell::Empty; BOARD_SIZE * BOARD_SIZE];
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                cells[coord_to_index(Coord::new(x as i32, y as i32))] = self.cells[y][x];
            }
        }
        cells
    }

    /// Return the cell state at `location`.
    ///
    /// Out-of-range coordinates report [`Cell::Empty`] and never fail: the
    /// directional scans in the rules rely on this to notice that a walk has
    /// left the board without a separate bounds check.
    pub fn stone_at(&self, location: Coord) -> Cell {
        if !location.on_board() {
            return Cell::Empty;
        }
        self.cells[location.y as usize][location.x as usize]
    }

    /// Insert a stone of `color` at `location`.
    ///
    /// Fails if the target cell is not currently empty or is off the board;
    /// the board is left unchanged on failure.
    pub fn set_stone(&mut self, location: Coord, color: Player) -> Result<(), GameError> {
        if !location.on_board() || self.stone_at(location) != Cell::Empty {
            return Err(GameError::InvalidMove);
        }
        self.cells[location.y as usize][location.x as usize] = color.to_cell();
        Ok(())
    }

    /// Toggle the stone at `location` between Black and White.
    ///
    /// Fails if the cell is empty or off the board; empty cells are never
    /// touched.
    pub fn flip_stone(&mut self, location: Coord) -> Result<(), GameError> {
        match self.stone_at(location) {
            Cell::Black => {
                self.cells[location.y as usize][location.x as usize] = Cell::White;
                Ok(())
            }
            Cell::White => {
                self.cells[location.y as usize][location.x as usize] = Cell::Black;
                Ok(())
            }
            Cell::Empty => Err(GameError::InvalidMove),
        }
    }

    /// Count the cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
