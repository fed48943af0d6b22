//! Turn orchestration
//!
//! A [`Game`] holds the latest board, whose turn it is and who plays each
//! color. A successful move commits the new board and hands the turn over;
//! a failed one changes nothing and the same player tries again.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::agent::{Action, Agent};
use crate::board::{Board, Color, Move, Piece, Position};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::rules::{outcome, Outcome};

/// Someone playing one color: a human driven by UI events, or an agent
#[derive(Clone)]
pub struct Player {
    pub name: String,
    pub strategy: Option<Arc<dyn Agent>>,
}

impl Player {
    pub fn human() -> Self {
        Self {
            name: "Human".to_string(),
            strategy: None,
        }
    }

    pub fn ai(name: impl Into<String>, agent: impl Agent + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Some(Arc::new(agent)),
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.strategy.is_none()
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        self.strategy.is_some()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_human() {
            write!(f, "Human")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("ai", &self.is_ai())
            .finish()
    }
}

/// A single game in progress
#[derive(Debug)]
pub struct Game {
    board: Board,
    config: Arc<GameConfig>,
    active_color: Color,
    players: [Player; 2],
    turns: u32,
}

impl Game {
    /// New game with two human players
    pub fn new(config: Arc<GameConfig>) -> Result<Self> {
        Self::with_players(config, Player::human(), Player::human())
    }

    pub fn with_players(config: Arc<GameConfig>, white: Player, black: Player) -> Result<Self> {
        let board = Board::new(Arc::clone(&config))?;
        info!(%white, %black, rows = board.rows(), columns = board.columns(), "new game");
        Ok(Self {
            board,
            config,
            active_color: Color::White,
            players: [white, black],
            turns: 0,
        })
    }

    /// The current board snapshot
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &Arc<GameConfig> {
        &self.config
    }

    /// Color whose turn it is
    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Number of turns played or skipped so far
    #[inline]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn set_player(&mut self, color: Color, player: Player) {
        self.players[color.index()] = player;
    }

    /// Player whose turn it is
    pub fn active_player(&self) -> &Player {
        self.player(self.active_color)
    }

    /// Hand the turn to the other color
    pub fn advance_turn(&mut self) {
        self.active_color = self.active_color.opponent();
        self.turns += 1;
    }

    /// Pass the turn without moving, for a side whose agent found nothing to play
    pub fn skip_turn(&mut self) {
        warn!(color = %self.active_color, "turn skipped");
        self.advance_turn();
    }

    /// How the game ended, if it has
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board, self.active_color)
    }

    /// True once the side to move has no legal move
    pub fn over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Delta that takes the action's piece from where it stands now to its
    /// destination
    pub fn action_to_move(&self, action: &Action) -> Result<Move> {
        if !self.board.is_valid(action.destination) {
            return Err(Error::OutOfBounds(action.destination));
        }
        let current = self.board.piece_location(&action.piece)?;
        Ok(action.destination - current)
    }

    /// Move a piece of the active color and pass the turn.
    /// On error nothing changes.
    #[instrument(level = "debug", skip_all, fields(piece = %piece, from = %start, mv = %mv))]
    pub fn move_piece(&mut self, piece: &Piece, start: Position, mv: Move) -> Result<()> {
        if piece.color() != self.active_color {
            return Err(Error::IllegalMove(format!(
                "{} cannot move on {}'s turn",
                piece, self.active_color
            )));
        }

        self.board = self.board.move_piece(piece, start, mv)?;
        debug!(turn = self.turns, to = %(start + mv), "move committed");
        self.advance_turn();

        if let Some(result) = self.outcome() {
            info!(winner = %result.winner, reason = ?result.reason, turns = self.turns, "game over");
        }
        Ok(())
    }

    /// Apply an agent's proposal against the live board
    pub fn apply_action(&mut self, action: &Action) -> Result<()> {
        let mv = self.action_to_move(action)?;
        let start = self.board.piece_location(&action.piece)?;
        self.move_piece(&action.piece, start, mv)
    }
}
