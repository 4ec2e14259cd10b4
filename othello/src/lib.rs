//! Core types and game logic for Othello (Reversi)
//!
//! The crate is split along the natural seams of the game:
//! - [`Board`]: an 8x8 grid of cells with bounds-safe reads and guarded writes
//! - [`Rules`]: move legality, stone flipping (standard and loose variants),
//!   move-possibility scanning and scoring, built on top of the board
//! - [`Game`]: the committed-move wrapper that tracks whose turn it is,
//!   detects the end of the game and records the most recent move's diff
//!
//! Coordinates inside the crate are (x, y) pairs with (0, 0) at the top-left
//! corner. The presentation layer addresses squares by a linear row-major
//! index instead; [`index_to_coord`] and [`coord_to_index`] convert between
//! the two representations.

pub mod board;
pub mod game;
pub mod rules;

pub use crate::board::Board;
pub use crate::game::{Game, MoveDiff};
pub use crate::rules::Rules;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidMove,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// A square position as an (x, y) pair.
///
/// Coordinates may transiently leave the board while a directional scan walks
/// outward; reads at out-of-range coordinates report [`Cell::Empty`] rather
/// than failing, which is how every scan detects that it has left the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Advance one square in the given direction.
    pub fn step(self, dir: Coord) -> Coord {
        Coord {
            x: self.x + dir.x,
            y: self.y + dir.y,
        }
    }

    /// True if the coordinate addresses a square on the 8x8 board.
    pub fn on_board(self) -> bool {
        let size = BOARD_SIZE as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

/// The 8 compass directions as unit vectors, one per capturable line.
pub const DIRECTIONS: [Coord; 8] = [
    Coord { x: -1, y: -1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 1 },
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: 1 },
];

/// Convert a linear row-major board index (0..64) to a coordinate.
pub fn index_to_coord(index: usize) -> Coord {
    Coord {
        x: (index % BOARD_SIZE) as i32,
        y: (index / BOARD_SIZE) as i32,
    }
}

/// Convert an on-board coordinate to its linear row-major index.
pub fn coord_to_index(coord: Coord) -> usize {
    coord.x as usize + coord.y as usize * BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
    }

    #[test]
    fn test_directions_are_the_eight_unit_vectors() {
        assert_eq!(DIRECTIONS.len(), 8);
        for dir in DIRECTIONS {
            assert!(dir.x >= -1 && dir.x <= 1);
            assert!(dir.y >= -1 && dir.y <= 1);
            assert!(!(dir.x == 0 && dir.y == 0));
        }
        // No direction listed twice
        for (i, a) in DIRECTIONS.iter().enumerate() {
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_index_coord_round_trip() {
        for index in 0..64 {
            let coord = index_to_coord(index);
            assert!(coord.on_board());
            assert_eq!(coord_to_index(coord), index);
        }
    }

    #[test]
    fn test_index_adapter_is_row_major() {
        assert_eq!(index_to_coord(0), Coord::new(0, 0));
        assert_eq!(index_to_coord(7), Coord::new(7, 0));
        assert_eq!(index_to_coord(8), Coord::new(0, 1));
        assert_eq!(index_to_coord(63), Coord::new(7, 7));
        assert_eq!(coord_to_index(Coord::new(5, 3)), 29);
    }

    #[test]
    fn test_coord_step() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Coord::new(1, -1)), Coord::new(4, 2));
        // Stepping may leave the board; that is detected by on_board
        assert!(!Coord::new(0, 0).step(Coord::new(-1, 0)).on_board());
    }
}
