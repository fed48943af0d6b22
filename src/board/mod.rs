//! Board primitives for Cragspider
//!
//! Coordinates, step deltas, colors, squares and pieces. The persistent
//! [`Board`] itself lives in [`board`].

pub mod board;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fmt;
use std::ops::{Add, Sub};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;

use crate::config::PieceConfig;

// Re-exports
pub use board::Board;

/// Player / piece colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot for per-color arrays
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Position on the board, zero-based, row increasing downward.
///
/// Signed so that stepping off the board is representable; use
/// [`Board::is_valid`] before treating it as a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "[i32; 2]")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `self + mv`, or `None` if a coordinate overflows
    #[inline]
    pub fn checked_add(self, mv: Move) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(mv.d_row)?,
            self.col.checked_add(mv.d_col)?,
        ))
    }
}

impl From<[i32; 2]> for Position {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// One atomic step (delta row, delta col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[i32; 2]")]
pub struct Move {
    pub d_row: i32,
    pub d_col: i32,
}

impl Move {
    #[inline]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }
}

impl From<[i32; 2]> for Move {
    fn from([d_row, d_col]: [i32; 2]) -> Self {
        Self { d_row, d_col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.d_row, self.d_col)
    }
}

impl Add<Move> for Position {
    type Output = Position;

    #[inline]
    fn add(self, mv: Move) -> Position {
        Position::new(self.row + mv.d_row, self.col + mv.d_col)
    }
}

/// Delta that takes `rhs` to `self`
impl Sub for Position {
    type Output = Move;

    #[inline]
    fn sub(self, rhs: Position) -> Move {
        Move::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Unit vectors for up, right, down, left
pub const CARDINAL_DIRECTIONS: [Move; 4] = [
    Move::new(-1, 0),
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(0, -1),
];

/// Cell of a sprite sheet, `[row, col]`
pub type FrameCoords = [u32; 2];

/// Visual-only attributes of a board cell. Game rules never look at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub frame: FrameCoords,
    /// Which way the tile faces, one of [`CARDINAL_DIRECTIONS`]
    pub rotation: Move,
}

/// Process-unique identity of a piece instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u64);

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(1);

impl PieceId {
    fn fresh() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A piece instance on (or captured from) a board.
///
/// Two pieces with the same name and color are still different pieces:
/// equality and hashing go by [`PieceId`]. Cloning keeps the id, so a clone
/// refers to the same piece.
#[derive(Debug, Clone)]
pub struct Piece {
    id: PieceId,
    name: String,
    color: Color,
    config: Arc<PieceConfig>,
}

impl Piece {
    /// Create a new piece instance of the given kind
    pub fn new(color: Color, config: Arc<PieceConfig>) -> Self {
        Self {
            id: PieceId::fresh(),
            name: config.name.clone(),
            color,
            config,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Movement paths and sprite references of this piece's kind
    #[inline]
    pub fn config(&self) -> &PieceConfig {
        &self.config
    }

    /// A piece without a name stands for "no piece" and is rejected by the board
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Sprite frames for this piece's color, empty if the config has none
    pub fn sprites(&self) -> &[FrameCoords] {
        self.config
            .sprites
            .get(&self.color)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Legal destinations from `from` on `board`
    pub fn valid_moves(&self, from: Position, board: &Board) -> Vec<Position> {
        crate::rules::valid_moves(self, from, board)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl std::hash::Hash for Piece {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.name)
    }
}
