//! Shared test setups: small empty boards and a two-step cardinal piece

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Board, Color, Move, Piece};
use crate::config::{BoardConfig, GameConfig, PieceConfig};

/// Piece kind that moves 1 or 2 squares in each cardinal direction
pub fn cardinal_config() -> Arc<PieceConfig> {
    Arc::new(PieceConfig::new(
        "test_piece",
        vec![
            vec![Move::new(1, 0), Move::new(1, 0)],
            vec![Move::new(-1, 0), Move::new(-1, 0)],
            vec![Move::new(0, 1), Move::new(0, 1)],
            vec![Move::new(0, -1), Move::new(0, -1)],
        ],
    ))
}

pub fn cardinal_piece(color: Color) -> Piece {
    Piece::new(color, cardinal_config())
}

/// Config with the given dimensions, the cardinal piece registered as
/// `test_piece`, and no starting layout
pub fn empty_config(rows: i32, columns: i32) -> Arc<GameConfig> {
    Arc::new(GameConfig {
        pieces: vec![cardinal_config()],
        board: BoardConfig {
            rows,
            columns,
            ..BoardConfig::default()
        },
    })
}

pub fn empty_board(rows: i32, columns: i32) -> Board {
    let mut rng = StdRng::seed_from_u64(7);
    Board::empty_with_rng(empty_config(rows, columns), &mut rng).unwrap()
}
