//! GUI module for Cragspider
//!
//! A native window built on egui/eframe. The [`Playfield`] holds all game and
//! AI-worker state and can be driven without a window; the rest only draws it
//! and feeds it clicks.

mod app;
mod board_view;
mod playfield;
mod theme;

pub use app::CragspiderApp;
pub use playfield::{AiState, GameMode, Opponent, Playfield, Proposal, Selection, DEFAULT_AI_PROFILE};
