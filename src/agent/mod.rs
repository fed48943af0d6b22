//! Move-selection policies for automated players
//!
//! An [`Agent`] looks at a board snapshot and proposes an [`Action`]: which
//! piece to move and where to. The destination is absolute so the proposal
//! stays meaningful if it is applied later; the orchestration layer turns it
//! into a delta against the live board.

pub mod greedy;
pub mod random;

pub use greedy::GreedyAgent;
pub use random::RandomAgent;

use crate::board::{Board, Piece, Position};
use crate::error::Result;

/// A piece (by identity) and the square it should move to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub piece: Piece,
    pub destination: Position,
}

/// Pluggable move-selection policy.
///
/// Agents run on a worker thread, so they must be shareable across threads.
pub trait Agent: Send + Sync {
    /// Pick the next move for this agent's color.
    ///
    /// Fails with [`crate::Error::NoLegalMove`] when none of the agent's
    /// pieces can move.
    fn next_move(&self, board: &Board) -> Result<Action>;
}
