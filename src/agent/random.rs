//! Baseline agent that plays a random legal move

use rand::seq::SliceRandom;
use tracing::debug;

use super::{Action, Agent};
use crate::board::{Board, Color};
use crate::error::{Error, Result};

/// Picks a random piece that can move, then a random destination for it
#[derive(Debug, Clone, Copy)]
pub struct RandomAgent {
    color: Color,
}

impl RandomAgent {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Agent for RandomAgent {
    fn next_move(&self, board: &Board) -> Result<Action> {
        let mut rng = rand::thread_rng();
        let mut pieces = board.pieces_by_color(self.color);
        pieces.shuffle(&mut rng);

        // First piece with anything to do wins
        for piece in pieces {
            let Ok(from) = board.piece_location(&piece) else {
                continue;
            };
            let options = piece.valid_moves(from, board);
            if let Some(&destination) = options.choose(&mut rng) {
                debug!(color = %self.color, piece = %piece, %from, to = %destination, "random agent picked move");
                return Ok(Action { piece, destination });
            }
        }

        Err(Error::NoLegalMove(self.color))
    }
}
