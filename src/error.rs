//! Error type shared by the board engine, configuration and agents

use crate::board::{Color, Position};
use thiserror::Error;

/// Everything that can go wrong while building or playing a game.
///
/// Board and agent operations never panic on bad input; they hand one of
/// these back and leave the receiver untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty piece, degenerate board dimensions and similar caller mistakes
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} is out of bounds")]
    OutOfBounds(Position),

    #[error("{0} is occupied")]
    Occupied(Position),

    /// A piece missing from the board, or a name missing from a config
    #[error("{0} not found")]
    NotFound(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// An agent could not find any piece with a legal destination
    #[error("no legal move available for {0}")]
    NoLegalMove(Color),

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
