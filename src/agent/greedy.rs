//! One-ply material agent
//!
//! Tries every legal move, scores the resulting board with a
//! [`BoardScorer`] and keeps the best one for its own color. Candidates are
//! shuffled first so equal-scoring moves are picked at random.

use rand::seq::SliceRandom;
use tracing::debug;

use super::{Action, Agent};
use crate::board::{Board, Color};
use crate::error::{Error, Result};
use crate::eval::BoardScorer;
use crate::rules::movable_pieces;

pub struct GreedyAgent {
    color: Color,
    scorer: BoardScorer,
}

impl GreedyAgent {
    pub fn new(color: Color, scorer: BoardScorer) -> Self {
        Self { color, scorer }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Agent for GreedyAgent {
    fn next_move(&self, board: &Board) -> Result<Action> {
        let mut candidates: Vec<_> = movable_pieces(board, self.color)
            .into_iter()
            .flat_map(|(piece, from, destinations)| {
                destinations
                    .into_iter()
                    .map(move |to| (piece.clone(), from, to))
            })
            .collect();
        candidates.shuffle(&mut rand::thread_rng());

        let mut best: Option<(Action, f32)> = None;
        for (piece, from, to) in candidates {
            let next = board.move_piece(&piece, from, to - from)?;
            let score = self.scorer.score_for(&next, self.color);
            if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
                best = Some((
                    Action {
                        piece,
                        destination: to,
                    },
                    score,
                ));
            }
        }

        let (action, score) = best.ok_or(Error::NoLegalMove(self.color))?;
        debug!(
            color = %self.color,
            profile = self.scorer.name(),
            piece = %action.piece,
            to = %action.destination,
            score,
            "greedy agent picked move"
        );
        Ok(action)
    }
}
