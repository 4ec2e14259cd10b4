//! Othello move-selection AI
//!
//! This crate picks moves for a computer-controlled side on top of the
//! `othello` rules crate:
//! - `heuristic`: scores a hypothetical placement by positional value
//!   (corner/edge runs), own liberties, and the mobility swing it causes
//! - `search`: enumerates and ranks the legal moves, then runs a shallow
//!   selectively-pruned look-ahead (best third of the candidates, best
//!   fifth of the replies, best fourth of the counter-replies, two plies
//!   by default) with randomized tie-breaking
//!
//! The externally consumed entry points are [`select_move`] (explicit
//! [`SearchConfig`] and random source, injectable for reproducible play)
//! and [`compute_move`] (defaults, fresh entropy seed per call, `None`
//! when the side has no legal move). The AI is stateless between calls and
//! only ever mutates value copies of the position it is given.

pub mod heuristic;
pub mod search;

pub use heuristic::{count_liberties, evaluate_location, move_score};
pub use search::{compute_move, possible_moves, ranked_moves, select_move, SearchConfig};
