//! Game rules for Cragspider
//!
//! This module implements the rule set:
//! - Path-based movement with blocking and capture-stops-path semantics
//! - Game termination (the side to move with no legal move loses)

pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use movegen::{has_legal_move, movable_pieces, valid_moves};
pub use win::{outcome, EndReason, Outcome};
