//! Persistent board with capture tracking
//!
//! Every mutating operation returns a new [`Board`] and leaves the receiver
//! as it was. The square grid never changes after creation and is shared by
//! all versions; the piece grid and capture lists are copied per mutation.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{Color, Move, Piece, Position, Square, CARDINAL_DIRECTIONS};
use crate::config::GameConfig;
use crate::error::{Error, Result};

/// Game board: a grid of squares with at most one piece per square
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    columns: i32,
    /// Row-major visual data, shared across board versions
    squares: Arc<Vec<Square>>,
    /// Row-major piece grid
    pieces: Vec<Option<Piece>>,
    /// Pieces captured by each color, in capture order
    captured: [Vec<Piece>; 2],
    config: Arc<GameConfig>,
}

impl Board {
    /// Build the starting board described by `config`
    pub fn new(config: Arc<GameConfig>) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Build the starting board, drawing square visuals from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: Arc<GameConfig>, rng: &mut R) -> Result<Self> {
        let mut board = Self::empty_with_rng(config, rng)?;
        board.place_starting_pieces()?;
        Ok(board)
    }

    /// Board with the configured dimensions and no pieces, drawing square
    /// visuals from `rng`
    pub fn empty_with_rng<R: Rng + ?Sized>(config: Arc<GameConfig>, rng: &mut R) -> Result<Self> {
        let cells = config.board.cell_count()?;
        let rows = config.board.rows;
        let columns = config.board.columns;

        let squares = (0..cells)
            .map(|idx| random_square(idx as i32 / columns, idx as i32 % columns, rng))
            .collect();

        Ok(Self {
            rows,
            columns,
            squares: Arc::new(squares),
            pieces: vec![None; cells],
            captured: [Vec::new(), Vec::new()],
            config,
        })
    }

    /// Place every configured starting piece for both colors.
    /// Only used during construction, before the board is handed out.
    fn place_starting_pieces(&mut self) -> Result<()> {
        let config = Arc::clone(&self.config);
        for color in Color::ALL {
            for start in config.board.starting_positions(color) {
                let piece = config.spawn(&start.name, color)?;
                *self = self.place_piece(&piece, start.position)?;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// The rule data this board was built from
    #[inline]
    pub fn config(&self) -> &Arc<GameConfig> {
        &self.config
    }

    /// Check if position is on the board
    #[inline]
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.columns
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_valid(pos) {
            Some((pos.row * self.columns + pos.col) as usize)
        } else {
            None
        }
    }

    /// Check if a piece stands at `pos`. Off-board positions are never occupied.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.piece_at(pos).is_some()
    }

    /// Get piece at position
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.index(pos).and_then(|idx| self.pieces[idx].as_ref())
    }

    /// Visual data of the square at position
    #[inline]
    pub fn square_at(&self, pos: Position) -> Option<&Square> {
        self.index(pos).map(|idx| &self.squares[idx])
    }

    /// Find where `piece` stands (by identity)
    pub fn piece_location(&self, piece: &Piece) -> Result<Position> {
        if piece.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot find location of an empty piece".to_string(),
            ));
        }
        self.pieces()
            .find(|(_, p)| *p == piece)
            .map(|(pos, _)| pos)
            .ok_or_else(|| Error::NotFound(format!("{} on board", piece)))
    }

    /// All pieces with their positions, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        let columns = self.columns;
        self.pieces.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|p| (Position::new(idx as i32 / columns, idx as i32 % columns), p))
        })
    }

    /// All pieces of one color, row-major
    pub fn pieces_by_color(&self, color: Color) -> Vec<Piece> {
        self.pieces()
            .filter(|(_, p)| p.color() == color)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Pieces captured BY `color`, oldest first
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Return a board with `piece` placed at `pos`
    pub fn place_piece(&self, piece: &Piece, pos: Position) -> Result<Board> {
        if piece.is_empty() {
            return Err(Error::InvalidArgument("cannot place an empty piece".to_string()));
        }
        let idx = self.index(pos).ok_or(Error::OutOfBounds(pos))?;
        if self.pieces[idx].is_some() {
            return Err(Error::Occupied(pos));
        }
        if let Ok(existing) = self.piece_location(piece) {
            return Err(Error::InvalidArgument(format!(
                "{} is already on the board at {}",
                piece, existing
            )));
        }

        let mut next = self.clone();
        next.pieces[idx] = Some(piece.clone());
        Ok(next)
    }

    /// Return a board with `piece` moved from `start` by `mv`, capturing
    /// whatever enemy piece stands on the destination.
    pub fn move_piece(&self, piece: &Piece, start: Position, mv: Move) -> Result<Board> {
        // The piece has to actually be at the starting position
        if self.piece_at(start) != Some(piece) {
            return Err(Error::IllegalMove(format!("{} is not at {}", piece, start)));
        }

        let end = start
            .checked_add(mv)
            .ok_or_else(|| Error::IllegalMove(format!("move {} from {} overflows", mv, start)))?;
        if !piece.valid_moves(start, self).contains(&end) {
            return Err(Error::IllegalMove(format!(
                "move {} from {} is not valid for {}",
                mv, start, piece
            )));
        }

        // Both positions are on the board once the checks above pass
        let (Some(from), Some(to)) = (self.index(start), self.index(end)) else {
            return Err(Error::OutOfBounds(end));
        };

        let mut next = self.clone();
        if let Some(victim) = next.pieces[to].take() {
            debug!(attacker = %piece, victim = %victim, at = %end, "capture");
            next.captured[piece.color().index()].push(victim);
        }
        next.pieces[to] = next.pieces[from].take();
        debug!(piece = %piece, from = %start, to = %end, "moved");
        Ok(next)
    }
}

/// Squares come in two tile bands by parity, with a random tile and
/// facing inside the band so every board looks a little different.
fn random_square<R: Rng + ?Sized>(row: i32, col: i32, rng: &mut R) -> Square {
    let frame = if (row + col) % 2 == 0 {
        [rng.gen_range(0..=1), rng.gen_range(0..=2)]
    } else {
        [rng.gen_range(0..=1), rng.gen_range(6..=8)]
    };
    let rotation = *CARDINAL_DIRECTIONS
        .choose(rng)
        .unwrap_or(&CARDINAL_DIRECTIONS[0]);
    Square { frame, rotation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::{cardinal_piece, empty_board};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_board() -> Board {
        let config = Arc::new(GameConfig::embedded().unwrap());
        Board::with_rng(config, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn test_new_board_from_config() {
        let board = default_board();
        assert_eq!(board.rows(), 10);
        assert_eq!(board.columns(), 10);

        for color in Color::ALL {
            for start in board.config().board.starting_positions(color) {
                let piece = board.piece_at(start.position).expect("starting piece placed");
                assert_eq!(piece.name(), start.name);
                assert_eq!(piece.color(), color);
            }
        }
        assert_eq!(board.pieces().count(), 8);
    }

    #[test]
    fn test_squares_are_cardinal_and_banded() {
        let board = default_board();
        for row in 0..board.rows() {
            for col in 0..board.columns() {
                let square = board.square_at(Position::new(row, col)).unwrap();
                assert!(CARDINAL_DIRECTIONS.contains(&square.rotation));
                assert!(square.frame[0] <= 1);
                if (row + col) % 2 == 0 {
                    assert!(square.frame[1] <= 2);
                } else {
                    assert!((6..=8).contains(&square.frame[1]));
                }
            }
        }
        assert!(board.square_at(Position::new(10, 0)).is_none());
    }

    #[test]
    fn test_unknown_starting_piece_aborts() {
        let mut config = GameConfig::embedded().unwrap();
        config.board.white[0].name = "dragon".to_string();
        assert!(matches!(Board::new(Arc::new(config)), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_overlapping_start_aborts() {
        let mut config = GameConfig::embedded().unwrap();
        config.board.black[0].position = config.board.white[0].position;
        assert!(matches!(Board::new(Arc::new(config)), Err(Error::Occupied(_))));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        use crate::board::fixtures::empty_config;
        let mut rng = StdRng::seed_from_u64(1);
        for (rows, columns) in [(50_000, 50_000), (i32::MAX, 2), (0, 3)] {
            let result = Board::empty_with_rng(empty_config(rows, columns), &mut rng);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_overflowing_move_rejected() {
        let piece = cardinal_piece(Color::White);
        let board = empty_board(5, 5).place_piece(&piece, Position::new(2, 2)).unwrap();
        let result = board.move_piece(&piece, Position::new(2, 2), Move::new(i32::MAX, 0));
        assert!(matches!(result, Err(Error::IllegalMove(_))));
    }

    #[test]
    fn test_is_valid() {
        let board = empty_board(5, 5);
        assert!(board.is_valid(Position::new(0, 0)));
        assert!(board.is_valid(Position::new(4, 4)));
        assert!(!board.is_valid(Position::new(-1, 0)));
        assert!(!board.is_valid(Position::new(0, -1)));
        assert!(!board.is_valid(Position::new(5, 0)));
        assert!(!board.is_valid(Position::new(0, 5)));
        assert!(!board.is_occupied(Position::new(-1, 0)));
    }

    #[test]
    fn test_place_then_locate() {
        let board = empty_board(5, 5);
        let piece = cardinal_piece(Color::White);
        let placed = board.place_piece(&piece, Position::new(1, 1)).unwrap();

        assert_eq!(placed.piece_location(&piece).unwrap(), Position::new(1, 1));
        assert_eq!(placed.piece_at(Position::new(1, 1)), Some(&piece));
        // Receiver untouched
        assert!(!board.is_occupied(Position::new(1, 1)));
        assert!(matches!(board.piece_location(&piece), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_place_rejections() {
        let board = empty_board(5, 5);
        let piece = cardinal_piece(Color::White);
        let board = board.place_piece(&piece, Position::new(2, 2)).unwrap();

        let other = cardinal_piece(Color::Black);
        assert!(matches!(
            board.place_piece(&other, Position::new(2, 2)),
            Err(Error::Occupied(_))
        ));
        for pos in [
            Position::new(-1, 0),
            Position::new(5, 0),
            Position::new(0, -1),
            Position::new(0, 5),
        ] {
            assert!(matches!(board.place_piece(&other, pos), Err(Error::OutOfBounds(_))));
        }
        // Same instance twice
        assert!(matches!(
            board.place_piece(&piece, Position::new(0, 0)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_piece_rejected() {
        let board = empty_board(5, 5);
        let empty = Piece::new(Color::White, Arc::default());
        assert!(matches!(
            board.place_piece(&empty, Position::new(0, 0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(board.piece_location(&empty), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_move_leaves_receiver_unchanged() {
        let piece = cardinal_piece(Color::White);
        let board = empty_board(5, 5).place_piece(&piece, Position::new(2, 2)).unwrap();

        let moved = board.move_piece(&piece, Position::new(2, 2), Move::new(-2, 0)).unwrap();
        assert_eq!(moved.piece_location(&piece).unwrap(), Position::new(0, 2));
        assert!(!moved.is_occupied(Position::new(2, 2)));

        assert_eq!(board.piece_location(&piece).unwrap(), Position::new(2, 2));
        assert!(!board.is_occupied(Position::new(0, 2)));
    }

    #[test]
    fn test_squares_shared_between_versions() {
        let piece = cardinal_piece(Color::White);
        let board = empty_board(5, 5);
        let next = board.place_piece(&piece, Position::new(0, 0)).unwrap();
        assert!(Arc::ptr_eq(&board.squares, &next.squares));
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let piece = cardinal_piece(Color::White);
        let friend = cardinal_piece(Color::White);
        let board = empty_board(5, 5)
            .place_piece(&piece, Position::new(2, 2))
            .unwrap()
            .place_piece(&friend, Position::new(2, 3))
            .unwrap();
        let start = Position::new(2, 2);

        // Diagonal is not one of its paths
        assert!(matches!(
            board.move_piece(&piece, start, Move::new(1, 1)),
            Err(Error::IllegalMove(_))
        ));
        // Onto a friendly piece
        assert!(matches!(
            board.move_piece(&piece, start, Move::new(0, 1)),
            Err(Error::IllegalMove(_))
        ));
        // Jumping over a friendly piece
        assert!(matches!(
            board.move_piece(&piece, start, Move::new(0, 2)),
            Err(Error::IllegalMove(_))
        ));
        // Off the board
        assert!(matches!(
            board.move_piece(&friend, Position::new(2, 3), Move::new(0, 2)),
            Err(Error::IllegalMove(_))
        ));
    }

    #[test]
    fn test_piece_not_at_start() {
        let piece = cardinal_piece(Color::White);
        let stranger = cardinal_piece(Color::White);
        let board = empty_board(5, 5).place_piece(&piece, Position::new(2, 2)).unwrap();

        // Right position, wrong instance
        let result = board.move_piece(&stranger, Position::new(2, 2), Move::new(1, 0));
        assert!(matches!(result, Err(Error::IllegalMove(_))));
        // Right instance, wrong position
        let result = board.move_piece(&piece, Position::new(3, 2), Move::new(1, 0));
        assert!(matches!(result, Err(Error::IllegalMove(_))));
        assert_eq!(board.piece_location(&piece).unwrap(), Position::new(2, 2));
    }

    #[test]
    fn test_stale_reapplication_fails() {
        let piece = cardinal_piece(Color::White);
        let board = empty_board(5, 5).place_piece(&piece, Position::new(2, 2)).unwrap();
        let start = Position::new(2, 2);
        let mv = Move::new(1, 0);

        let next = board.move_piece(&piece, start, mv).unwrap();
        assert!(matches!(next.move_piece(&piece, start, mv), Err(Error::IllegalMove(_))));
    }

    #[test]
    fn test_capture_bookkeeping() {
        let attacker = cardinal_piece(Color::White);
        let victim = cardinal_piece(Color::Black);
        let board = empty_board(5, 5)
            .place_piece(&attacker, Position::new(2, 2))
            .unwrap()
            .place_piece(&victim, Position::new(0, 2))
            .unwrap();

        let next = board
            .move_piece(&attacker, Position::new(2, 2), Move::new(-2, 0))
            .unwrap();

        assert_eq!(next.captured_pieces(Color::White), &[victim.clone()]);
        assert!(next.captured_pieces(Color::Black).is_empty());
        assert_eq!(next.piece_at(Position::new(0, 2)), Some(&attacker));
        assert!(next.pieces().all(|(_, p)| *p != victim));
        assert!(matches!(next.piece_location(&victim), Err(Error::NotFound(_))));

        // Receiver still has the victim and no captures
        assert!(board.captured_pieces(Color::White).is_empty());
        assert_eq!(board.piece_at(Position::new(0, 2)), Some(&victim));
    }

    #[test]
    fn test_captures_accumulate_in_order() {
        let hunter = cardinal_piece(Color::Black);
        let first = cardinal_piece(Color::White);
        let second = cardinal_piece(Color::White);
        let board = empty_board(5, 5)
            .place_piece(&hunter, Position::new(0, 0))
            .unwrap()
            .place_piece(&first, Position::new(1, 0))
            .unwrap()
            .place_piece(&second, Position::new(1, 1))
            .unwrap();

        let board = board.move_piece(&hunter, Position::new(0, 0), Move::new(1, 0)).unwrap();
        let board = board.move_piece(&hunter, Position::new(1, 0), Move::new(0, 1)).unwrap();
        assert_eq!(board.captured_pieces(Color::Black), &[first, second]);
    }

    #[test]
    fn test_pieces_by_color() {
        let whites = [cardinal_piece(Color::White), cardinal_piece(Color::White)];
        let blacks = [cardinal_piece(Color::Black), cardinal_piece(Color::Black)];
        let board = empty_board(5, 5)
            .place_piece(&blacks[0], Position::new(0, 0))
            .unwrap()
            .place_piece(&whites[0], Position::new(1, 3))
            .unwrap()
            .place_piece(&blacks[1], Position::new(3, 1))
            .unwrap()
            .place_piece(&whites[1], Position::new(4, 4))
            .unwrap();

        let found_white = board.pieces_by_color(Color::White);
        let found_black = board.pieces_by_color(Color::Black);
        assert_eq!(found_white.len(), 2);
        assert_eq!(found_black.len(), 2);
        assert!(whites.iter().all(|p| found_white.contains(p)));
        assert!(blacks.iter().all(|p| found_black.contains(p)));
        assert!(empty_board(3, 3).pieces_by_color(Color::White).is_empty());
    }
}
