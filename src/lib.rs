//! Cragspider: a turn-based tactics game on a chess-like grid
//!
//! Two colors, White and Black, move pieces across a rectangular board.
//! Every piece kind is defined in configuration by a set of movement paths:
//! - A path is walked one delta at a time from the piece's square
//! - It stops at the board edge or at a friendly piece
//! - Landing on an enemy piece captures it and ends the path
//! - The side to move with no legal move loses
//!
//! # Architecture
//!
//! - [`board`]: Positions, pieces and the persistent [`Board`]
//! - [`rules`]: Path move generation and game termination
//! - [`config`]: YAML piece catalog, board layout and AI scoring profiles
//! - [`game`]: Turn orchestration over a series of board snapshots
//! - [`agent`]: Pluggable move-selection policies
//! - [`eval`]: Material scoring used by agents
//! - [`ui`]: egui front end with a background AI worker
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use cragspider::{Agent, Color, Game, GameConfig, RandomAgent};
//!
//! let config = Arc::new(GameConfig::embedded().unwrap());
//! let mut game = Game::new(config).unwrap();
//!
//! let agent = RandomAgent::new(Color::White);
//! let action = agent.next_move(game.board()).unwrap();
//! game.apply_action(&action).unwrap();
//!
//! assert_eq!(game.active_color(), Color::Black);
//! ```
//!
//! Boards never change in place: [`Board::move_piece`] and
//! [`Board::place_piece`] return a new board and leave the receiver as it
//! was, so snapshots can be handed to worker threads freely.

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{Action, Agent, GreedyAgent, RandomAgent};
pub use board::{Board, Color, Move, Piece, PieceId, Position, Square};
pub use config::{AiConfig, AiPlayerConfig, GameConfig, PieceConfig};
pub use error::{Error, Result};
pub use eval::BoardScorer;
pub use game::{Game, Player};
pub use rules::{EndReason, Outcome};
