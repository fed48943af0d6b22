//! Board rendering for the Cragspider GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::playfield::Playfield;
use super::theme::*;
use crate::board::{Board, Piece, Position};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area, without the margin
    grid_rect: Rect,
    rows: i32,
    columns: i32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            grid_rect: Rect::NOTHING,
            rows: 0,
            columns: 0,
        }
    }
}

impl BoardView {
    /// Render the board.
    ///
    /// Returns `None` when nothing was clicked this frame, `Some(None)` for a
    /// click that missed the grid and `Some(Some(pos))` for a click on a cell.
    pub fn show(&mut self, ui: &mut egui::Ui, playfield: &Playfield) -> Option<Option<Position>> {
        let board = playfield.game().board();
        self.rows = board.rows();
        self.columns = board.columns();

        let available = ui.available_size();
        let cell_w = (available.x - 2.0 * BOARD_MARGIN) / self.columns as f32;
        let cell_h = (available.y - 2.0 * BOARD_MARGIN) / self.rows as f32;
        self.cell_size = cell_w.min(cell_h).max(8.0);

        let grid_size = Vec2::new(
            self.cell_size * self.columns as f32,
            self.cell_size * self.rows as f32,
        );
        let (response, painter) =
            ui.allocate_painter(grid_size + Vec2::splat(2.0 * BOARD_MARGIN), Sense::click());
        self.grid_rect = Rect::from_min_size(response.rect.min + Vec2::splat(BOARD_MARGIN), grid_size);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_squares(&painter, board);

        let hover = response.hover_pos().and_then(|p| self.screen_to_board(p));
        self.draw_highlights(&painter, board, &playfield.highlights(hover));

        if let Some((from, to)) = playfield.last_move() {
            self.draw_last_move(&painter, from, to);
        }
        if let Some(selection) = playfield.selection() {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(
                self.board_to_screen(selection.position),
                radius,
                Stroke::new(3.0, SELECTED_RING),
            );
        }
        let selected = playfield.selection().map(|s| s.position);
        self.draw_pieces(&painter, board, selected);

        if response.clicked() {
            Some(response.interact_pointer_pos().and_then(|p| self.screen_to_board(p)))
        } else {
            None
        }
    }

    fn draw_squares(&self, painter: &Painter, board: &Board) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let pos = Position::new(row, col);
                let Some(square) = board.square_at(pos) else {
                    continue;
                };
                let rect = self.cell_rect(pos);
                painter.rect_filled(rect, CornerRadius::ZERO, tile_color(square.frame));

                // Small notch on the edge the tile faces
                let facing = Vec2::new(square.rotation.d_col as f32, square.rotation.d_row as f32);
                let notch = rect.center() + facing * self.cell_size * 0.4;
                painter.circle_filled(notch, self.cell_size * 0.05, TILE_MARK);
            }
        }
    }

    fn draw_highlights(&self, painter: &Painter, board: &Board, targets: &[Position]) {
        for &pos in targets {
            let tint = if board.is_occupied(pos) {
                capture_tint()
            } else {
                move_tint()
            };
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::same(2), tint);
        }
    }

    fn draw_last_move(&self, painter: &Painter, from: Position, to: Position) {
        let stroke = Stroke::new(2.0, LAST_MOVE_MARKER);
        painter.line_segment([self.board_to_screen(from), self.board_to_screen(to)], stroke);
        painter.circle_filled(self.board_to_screen(from), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board, selected: Option<Position>) {
        for (pos, piece) in board.pieces() {
            self.draw_piece(painter, pos, piece, selected == Some(pos));
        }
    }

    /// Disc with the piece's initial, banded by its current sprite frame
    fn draw_piece(&self, painter: &Painter, pos: Position, piece: &Piece, selected: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, text) = piece_colors(piece.color());

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, egui::Color32::from_black_alpha(60));
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(1.5, PIECE_OUTLINE));
        if let Some(frame) = piece_frame(piece.sprites(), selected) {
            painter.circle_stroke(center, radius * 0.8, Stroke::new(radius * 0.12, sprite_accent(frame)));
        }

        let initial: String = piece.name().chars().take(1).flat_map(char::to_uppercase).collect();
        painter.text(
            center,
            Align2::CENTER_CENTER,
            initial,
            FontId::proportional(radius),
            text,
        );
    }

    fn cell_rect(&self, pos: Position) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Position> {
        if self.cell_size <= 0.0 || !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if (0..self.rows).contains(&row) && (0..self.columns).contains(&col) {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Position) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 10.0,
            grid_rect: Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(40.0, 30.0)),
            rows: 3,
            columns: 4,
        }
    }

    #[test]
    fn test_screen_to_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(101.0, 51.0)), Some(Position::new(0, 0)));
        assert_eq!(view.screen_to_board(Pos2::new(135.0, 75.0)), Some(Position::new(2, 3)));
        assert_eq!(view.screen_to_board(Pos2::new(99.0, 60.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(120.0, 85.0)), None);
    }

    #[test]
    fn test_board_to_screen_is_cell_center() {
        let view = view();
        assert_eq!(view.board_to_screen(Position::new(1, 2)), Pos2::new(125.0, 65.0));
        assert_eq!(view.screen_to_board(view.board_to_screen(Position::new(2, 1))), Some(Position::new(2, 1)));
    }
}
