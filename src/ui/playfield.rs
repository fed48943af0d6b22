//! Frame-loop state for the Cragspider GUI
//!
//! The [`Playfield`] sits between the window and the [`Game`]. Human input
//! arrives as board positions through [`Playfield::click`]; AI turns run on a
//! worker thread that hands exactly one [`Proposal`] back through a
//! single-slot channel, polled once per frame by [`Playfield::update`].
//! The AI's chosen piece then stays selected for `ai_move_delay` before the
//! move is applied, so the player can see what is about to happen.

use std::sync::mpsc::{sync_channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, warn};

use crate::agent::{Action, GreedyAgent, RandomAgent};
use crate::board::{Color, Piece, Position};
use crate::config::{AiConfig, GameConfig};
use crate::error::{Error, Result};
use crate::eval::BoardScorer;
use crate::game::{Game, Player};

/// Scoring profile the greedy opponent plays with unless told otherwise
pub const DEFAULT_AI_PROFILE: &str = "doofus";

/// Which kind of agent plays the AI side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Greedy,
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against an agent
    PvE {
        human_color: Color,
        opponent: Opponent,
    },
    /// Hotseat, both sides human
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::White,
            opponent: Opponent::Random,
        }
    }
}

/// The picked-up piece and where it stood: the human's pick, or the AI's while its move is on display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    pub position: Position,
}

/// What a worker thread sends back: the color it planned for and the agent's answer
#[derive(Debug)]
pub struct Proposal {
    pub color: Color,
    pub result: Result<Action>,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Proposal>,
        started: Instant,
    },
    /// Move chosen and on display until `apply_at`
    Pending {
        proposal: Proposal,
        started: Instant,
        apply_at: Instant,
    },
}

pub struct Playfield {
    game: Game,
    mode: GameMode,
    config: Arc<GameConfig>,
    ai_config: Arc<AiConfig>,
    ai_profile: String,
    selection: Option<Selection>,
    ai_state: AiState,
    last_move: Option<(Position, Position)>,
    pub message: Option<String>,
    /// How long the AI's chosen piece stays selected before its move is applied
    pub ai_move_delay: Duration,
}

impl Playfield {
    pub fn new(config: Arc<GameConfig>, ai_config: Arc<AiConfig>, mode: GameMode) -> Result<Self> {
        Self::with_profile(config, ai_config, mode, DEFAULT_AI_PROFILE)
    }

    /// Playfield whose greedy opponent uses the named scoring profile
    pub fn with_profile(
        config: Arc<GameConfig>,
        ai_config: Arc<AiConfig>,
        mode: GameMode,
        ai_profile: &str,
    ) -> Result<Self> {
        let game = Self::new_game(&config, &ai_config, mode, ai_profile)?;
        Ok(Self {
            game,
            mode,
            config,
            ai_config,
            ai_profile: ai_profile.to_string(),
            selection: None,
            ai_state: AiState::Idle,
            last_move: None,
            message: None,
            ai_move_delay: Duration::from_secs(1),
        })
    }

    fn new_game(
        config: &Arc<GameConfig>,
        ai_config: &AiConfig,
        mode: GameMode,
        ai_profile: &str,
    ) -> Result<Game> {
        let (white, black) = match mode {
            GameMode::PvE {
                human_color,
                opponent,
            } => {
                let ai_color = human_color.opponent();
                let ai = match opponent {
                    Opponent::Random => Player::ai("Random AI", RandomAgent::new(ai_color)),
                    Opponent::Greedy => {
                        let scorer = BoardScorer::from_profile(ai_config, ai_profile)?;
                        Player::ai(
                            format!("Greedy AI ({})", ai_profile),
                            GreedyAgent::new(ai_color, scorer),
                        )
                    }
                };
                match human_color {
                    Color::White => (Player::human(), ai),
                    Color::Black => (ai, Player::human()),
                }
            }
            GameMode::PvP => (Player::human(), Player::human()),
        };
        Game::with_players(Arc::clone(config), white, black)
    }

    /// Start over in `mode`. An in-flight worker is abandoned; its proposal
    /// goes nowhere.
    pub fn restart(&mut self, mode: GameMode) -> Result<()> {
        self.game = Self::new_game(&self.config, &self.ai_config, mode, &self.ai_profile)?;
        self.mode = mode;
        self.selection = None;
        self.ai_state = AiState::Idle;
        self.last_move = None;
        self.message = None;
        Ok(())
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Scoring profile the greedy opponent uses
    #[inline]
    pub fn ai_profile(&self) -> &str {
        &self.ai_profile
    }

    /// Names of every scoring profile in the AI config
    pub fn ai_profiles(&self) -> Vec<&str> {
        self.ai_config.players.iter().map(|p| p.name.as_str()).collect()
    }

    /// Switch the greedy opponent's profile. Takes effect from the next game.
    pub fn set_ai_profile(&mut self, name: &str) -> Result<()> {
        self.ai_config.player_config(name)?;
        self.ai_profile = name.to_string();
        Ok(())
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Start and end of the most recent committed move
    #[inline]
    pub fn last_move(&self) -> Option<(Position, Position)> {
        self.last_move
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.active_player().is_human()
    }

    /// True from worker start until the AI's move is applied
    pub fn is_ai_thinking(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { started, .. } | AiState::Pending { started, .. } => Some(started.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Handle a click on `pos`, or off the board when `None`.
    ///
    /// With nothing selected, a click on one of the active color's pieces
    /// picks it up. With a selection, clicking the same piece drops it,
    /// clicking another friendly piece switches to it and anything else is a
    /// move attempt. A rejected move leaves the game untouched and is only
    /// reported through `message`.
    pub fn click(&mut self, pos: Option<Position>) {
        if self.game.over() {
            self.message = Some("Game is over".to_string());
            return;
        }
        if !self.is_human_turn() {
            self.message = Some("Wait for the AI to move".to_string());
            return;
        }

        let Some(pos) = pos else {
            debug!("click off the board");
            self.selection = None;
            return;
        };

        let active = self.game.active_color();
        let clicked = self.game.board().piece_at(pos).cloned();

        let Some(selection) = self.selection.clone() else {
            match clicked {
                Some(piece) if piece.color() == active => {
                    debug!(%piece, %pos, "selected");
                    self.selection = Some(Selection { piece, position: pos });
                    self.message = None;
                }
                _ => debug!(%pos, "nothing to select"),
            }
            return;
        };

        match clicked {
            Some(piece) if piece == selection.piece => {
                self.selection = None;
            }
            Some(piece) if piece.color() == active => {
                self.selection = Some(Selection { piece, position: pos });
            }
            _ => {
                let mv = pos - selection.position;
                match self.game.move_piece(&selection.piece, selection.position, mv) {
                    Ok(()) => {
                        self.last_move = Some((selection.position, pos));
                        self.selection = None;
                        self.message = None;
                    }
                    Err(e) => {
                        warn!(piece = %selection.piece, from = %selection.position, to = %pos, error = %e, "move rejected");
                        self.message = Some(e.to_string());
                    }
                }
            }
        }
    }

    /// Per-frame tick: collect a finished proposal, apply a displayed one
    /// whose delay is up, then start the AI if it is its turn and nothing is
    /// in flight.
    pub fn update(&mut self) {
        self.poll_ai();

        if self.is_ai_thinking() || self.game.over() {
            return;
        }
        if let Some(agent) = self.game.active_player().strategy.clone() {
            let board = self.game.board().clone();
            let color = self.game.active_color();
            let (tx, rx) = sync_channel(1);

            thread::spawn(move || {
                let result = agent.next_move(&board);
                // Receiver is gone if the game was restarted meanwhile
                let _ = tx.send(Proposal { color, result });
            });

            debug!(%color, "ai worker started");
            self.ai_state = AiState::Thinking {
                receiver: rx,
                started: Instant::now(),
            };
        }
    }

    fn poll_ai(&mut self) {
        if let AiState::Thinking { receiver, started } = &self.ai_state {
            match receiver.try_recv() {
                Ok(proposal) => {
                    let started = *started;
                    self.stage_proposal(proposal, started);
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    error!("ai worker exited without a proposal");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            }
        }

        let due = matches!(&self.ai_state, AiState::Pending { apply_at, .. } if Instant::now() >= *apply_at);
        if !due {
            return;
        }
        if let AiState::Pending { proposal, .. } = std::mem::replace(&mut self.ai_state, AiState::Idle) {
            self.selection = None;
            self.apply_proposal(proposal);
        }
    }

    /// Select the proposed piece and hold the move for `ai_move_delay`.
    /// Stale proposals and failures go straight to `apply_proposal`.
    fn stage_proposal(&mut self, proposal: Proposal, started: Instant) {
        let shown = match &proposal.result {
            Ok(action) if proposal.color == self.game.active_color() => self
                .game
                .board()
                .piece_location(&action.piece)
                .ok()
                .map(|position| Selection {
                    piece: action.piece.clone(),
                    position,
                }),
            _ => None,
        };

        match shown {
            Some(selection) => {
                debug!(piece = %selection.piece, from = %selection.position, "ai move chosen");
                self.selection = Some(selection);
                self.ai_state = AiState::Pending {
                    proposal,
                    started,
                    apply_at: Instant::now() + self.ai_move_delay,
                };
            }
            None => {
                self.ai_state = AiState::Idle;
                self.apply_proposal(proposal);
            }
        }
    }

    fn apply_proposal(&mut self, proposal: Proposal) {
        if proposal.color != self.game.active_color() || self.game.over() {
            debug!(color = %proposal.color, "discarding stale proposal");
            return;
        }

        match proposal.result {
            Ok(action) => {
                let from = self.game.board().piece_location(&action.piece).ok();
                match self.game.apply_action(&action) {
                    Ok(()) => {
                        self.last_move = from.map(|from| (from, action.destination));
                        self.message = None;
                    }
                    Err(e) => {
                        warn!(piece = %action.piece, to = %action.destination, error = %e, "ai move rejected");
                        self.message = Some(e.to_string());
                    }
                }
            }
            Err(Error::NoLegalMove(color)) => {
                self.message = Some(format!("{} has no legal move", color));
                self.game.skip_turn();
            }
            Err(e) => {
                error!(color = %proposal.color, error = %e, "agent failed");
                self.message = Some(e.to_string());
                self.game.skip_turn();
            }
        }
    }

    /// Squares to tint: the selected piece's destinations, or those of the
    /// friendly piece under the pointer when nothing is selected.
    pub fn highlights(&self, hover: Option<Position>) -> Vec<Position> {
        if let Some(selection) = &self.selection {
            return selection.piece.valid_moves(selection.position, self.game.board());
        }
        if !self.is_human_turn() || self.game.over() {
            return Vec::new();
        }
        hover
            .and_then(|pos| {
                let piece = self.game.board().piece_at(pos)?;
                (piece.color() == self.game.active_color()).then(|| piece.valid_moves(pos, self.game.board()))
            })
            .unwrap_or_default()
    }
}
