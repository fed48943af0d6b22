//! Game and AI configuration loaded from YAML
//!
//! Both configs are plain values: parse them once at startup, wrap them in an
//! `Arc` and hand them to the constructors that need them. The default data
//! is compiled into the binary from `config/`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::board::{Color, FrameCoords, Move, Piece, Position};
use crate::error::{Error, Result};

const EMBEDDED_GAME_CONFIG: &str = include_str!("../config/game_config.yml");
const EMBEDDED_AI_CONFIG: &str = include_str!("../config/ai_config.yml");

/// Largest board, in cells, a config may describe
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// A kind of piece, like warrior or padwar
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PieceConfig {
    pub name: String,
    /// Sprite frames per color (renderer only)
    #[serde(default)]
    pub sprites: HashMap<Color, Vec<FrameCoords>>,
    /// Movement paths, each an ordered list of single-step deltas
    #[serde(default)]
    pub moves: Vec<Vec<Move>>,
}

impl PieceConfig {
    /// Piece kind with movement paths and no sprites
    pub fn new(name: impl Into<String>, moves: Vec<Vec<Move>>) -> Self {
        Self {
            name: name.into(),
            sprites: HashMap::new(),
            moves,
        }
    }
}

/// What piece starts where
#[derive(Debug, Clone, Deserialize)]
pub struct StartingPosition {
    pub name: String,
    pub position: Position,
}

/// Board dimensions and the starting layout for both colors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardConfig {
    pub rows: i32,
    pub columns: i32,
    #[serde(default)]
    pub white: Vec<StartingPosition>,
    #[serde(default)]
    pub black: Vec<StartingPosition>,
}

impl BoardConfig {
    /// Number of cells, or `InvalidArgument` for empty or oversized boards
    pub fn cell_count(&self) -> Result<usize> {
        let cells = if self.rows < 1 || self.columns < 1 {
            None
        } else {
            self.rows
                .checked_mul(self.columns)
                .map(|cells| cells as usize)
                .filter(|&cells| cells <= MAX_BOARD_CELLS)
        };
        cells.ok_or_else(|| {
            Error::InvalidArgument(format!(
                "board must be between 1x1 and {} cells, got {}x{}",
                MAX_BOARD_CELLS, self.rows, self.columns
            ))
        })
    }

    pub fn starting_positions(&self, color: Color) -> &[StartingPosition] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// All the rule data a game is played with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfig {
    pub pieces: Vec<Arc<PieceConfig>>,
    pub board: BoardConfig,
}

impl GameConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        debug!(
            pieces = config.pieces.len(),
            rows = config.board.rows,
            columns = config.board.columns,
            "loaded game config"
        );
        Ok(config)
    }

    /// Read a YAML file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// The default configuration shipped with the game
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_GAME_CONFIG)
    }

    /// Look up a piece kind by name
    pub fn piece_config(&self, name: &str) -> Result<Arc<PieceConfig>> {
        self.pieces
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("piece '{}' in configuration", name)))
    }

    /// Create a fresh piece instance of the named kind
    pub fn spawn(&self, name: &str, color: Color) -> Result<Piece> {
        Ok(Piece::new(color, self.piece_config(name)?))
    }

    fn validate(&self) -> Result<()> {
        self.board.cell_count()?;

        // Deltas larger than any board only risk overflow when walked
        let limit = self.board.rows.max(self.board.columns);
        for piece in &self.pieces {
            let oversized = piece
                .moves
                .iter()
                .flatten()
                .find(|step| step.d_row.abs() > limit || step.d_col.abs() > limit);
            if let Some(step) = oversized {
                return Err(Error::InvalidArgument(format!(
                    "piece '{}' has step {} larger than the board",
                    piece.name, step
                )));
            }
        }
        Ok(())
    }
}

/// Scoring profile for one AI player
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiPlayerConfig {
    pub name: String,
    /// Weight per piece name
    #[serde(default)]
    pub scoring: HashMap<String, f32>,
}

/// All AI scoring profiles
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiConfig {
    pub players: Vec<AiPlayerConfig>,
}

impl AiConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_AI_CONFIG)
    }

    /// Look up a profile by player name
    pub fn player_config(&self, name: &str) -> Result<&AiPlayerConfig> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::NotFound(format!("AI player '{}' in configuration", name)))
    }
}
