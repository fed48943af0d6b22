//! Path-based move generation
//!
//! A piece moves along paths: ordered lists of single-step deltas applied
//! cumulatively from its square. Each path is walked until one of:
//! - the next step leaves the board (not added)
//! - the next square holds a friendly piece (not added)
//! - the next square holds an enemy piece (added, then the path ends)
//!
//! Empty squares are added and the walk continues.

use crate::board::{Board, Color, Piece, Position};

/// Legal destinations for `piece` standing at `from`.
///
/// Destinations reachable along several paths appear once per path.
pub fn valid_moves(piece: &Piece, from: Position, board: &Board) -> Vec<Position> {
    let mut destinations = Vec::new();

    for path in &piece.config().moves {
        let mut current = from;
        for &step in path {
            let Some(next) = current.checked_add(step).filter(|&p| board.is_valid(p)) else {
                break;
            };
            match board.piece_at(next) {
                Some(occupant) if occupant.color() == piece.color() => break,
                Some(_) => {
                    // Capture ends the path
                    destinations.push(next);
                    break;
                }
                None => {
                    destinations.push(next);
                    current = next;
                }
            }
        }
    }

    destinations
}

/// Every piece of `color` that has at least one legal destination, with
/// its position and destinations, row-major.
pub fn movable_pieces(board: &Board, color: Color) -> Vec<(Piece, Position, Vec<Position>)> {
    board
        .pieces()
        .filter(|(_, p)| p.color() == color)
        .filter_map(|(pos, p)| {
            let moves = valid_moves(p, pos, board);
            (!moves.is_empty()).then(|| (p.clone(), pos, moves))
        })
        .collect()
}

/// Check if `color` can make any move at all
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .any(|(pos, p)| p.color() == color && !valid_moves(p, pos, board).is_empty())
}
