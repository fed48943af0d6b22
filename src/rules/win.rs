//! Game termination for Cragspider
//!
//! A side that cannot move loses: the game ends as soon as the color to move
//! has no legal destination for any of its pieces, including when it has no
//! pieces left at all.

use crate::board::{Board, Color};

use super::movegen::has_legal_move;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Color,
    pub reason: EndReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The loser has no pieces on the board
    Annihilation,
    /// The loser still has pieces but none of them can move
    Stalemate,
}

/// Check whether the game is over with `to_move` to play
pub fn outcome(board: &Board, to_move: Color) -> Option<Outcome> {
    if has_legal_move(board, to_move) {
        return None;
    }

    let reason = if board.pieces().any(|(_, p)| p.color() == to_move) {
        EndReason::Stalemate
    } else {
        EndReason::Annihilation
    };
    Some(Outcome {
        winner: to_move.opponent(),
        reason,
    })
}
