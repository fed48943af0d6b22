//! Material evaluation of a board
//!
//! Sums a per-name weight for every piece on the board: White pieces add,
//! Black pieces subtract. Positive scores favor White.

use crate::board::{Board, Color};
use crate::config::{AiConfig, AiPlayerConfig};
use crate::error::Result;

/// Board evaluator driven by one AI scoring profile
#[derive(Debug, Clone)]
pub struct BoardScorer {
    config: AiPlayerConfig,
}

impl BoardScorer {
    pub fn new(config: AiPlayerConfig) -> Self {
        Self { config }
    }

    /// Scorer for the named profile in `ai_config`
    pub fn from_profile(ai_config: &AiConfig, name: &str) -> Result<Self> {
        Ok(Self::new(ai_config.player_config(name)?.clone()))
    }

    /// Profile name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Weight of a piece name; names the profile does not know weigh nothing
    #[inline]
    pub fn weight(&self, name: &str) -> f32 {
        self.config.scoring.get(name).copied().unwrap_or(0.0)
    }

    /// Score the board. Positive means White is ahead.
    #[must_use]
    pub fn score(&self, board: &Board) -> f32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.color() {
                Color::White => self.weight(piece.name()),
                Color::Black => -self.weight(piece.name()),
            })
            .sum()
    }

    /// Score from `color`'s point of view
    #[inline]
    pub fn score_for(&self, board: &Board, color: Color) -> f32 {
        match color {
            Color::White => self.score(board),
            Color::Black => -self.score(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::config::GameConfig;
    use crate::error::Error;
    use std::sync::Arc;

    fn doofus() -> BoardScorer {
        BoardScorer::from_profile(&AiConfig::embedded().unwrap(), "doofus").unwrap()
    }

    #[test]
    fn test_known_profile() {
        let scorer = doofus();
        assert_eq!(scorer.name(), "doofus");
        assert_eq!(scorer.weight("warrior"), 1.0);
        assert_eq!(scorer.weight("dragon"), 0.0);
    }

    #[test]
    fn test_unknown_profile() {
        let result = BoardScorer::from_profile(&AiConfig::embedded().unwrap(), "nonexistent");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_symmetric_start_scores_zero() {
        let config = Arc::new(GameConfig::embedded().unwrap());
        let board = Board::new(config).unwrap();
        assert_eq!(doofus().score(&board), 0.0);
    }

    #[test]
    fn test_score_follows_material() {
        let config = Arc::new(GameConfig::embedded().unwrap());
        let board = Board::new(Arc::clone(&config)).unwrap();
        let scorer = doofus();
        let base = scorer.score(&board);

        let warrior = config.spawn("warrior", Color::White).unwrap();
        let board = board.place_piece(&warrior, Position::new(4, 4)).unwrap();
        assert_eq!(scorer.score(&board), base + 1.0);

        let padwar = config.spawn("padwar", Color::Black).unwrap();
        let board = board.place_piece(&padwar, Position::new(4, 5)).unwrap();
        assert_eq!(scorer.score(&board), base + 1.0 - 2.0);
        assert_eq!(scorer.score_for(&board, Color::Black), -(base + 1.0 - 2.0));
    }
}
