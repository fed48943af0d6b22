//! Theme constants for the Cragspider GUI

use egui::Color32;

use crate::board::{Color, FrameCoords};

// Board tiles: light/dark stone, shaded per sprite frame
pub const TILE_LIGHT: Color32 = Color32::from_rgb(196, 170, 128);
pub const TILE_DARK: Color32 = Color32::from_rgb(120, 94, 64);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(70, 52, 34);
/// First sprite-sheet column holding dark tiles
pub const DARK_FRAME_COLUMN: u32 = 6;
pub const TILE_MARK: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40);

// Pieces
pub const WHITE_PIECE: Color32 = Color32::from_rgb(245, 242, 232);
pub const WHITE_PIECE_TEXT: Color32 = Color32::from_rgb(40, 36, 30);
pub const BLACK_PIECE: Color32 = Color32::from_rgb(36, 34, 40);
pub const BLACK_PIECE_TEXT: Color32 = Color32::from_rgb(230, 226, 216);
pub const PIECE_OUTLINE: Color32 = Color32::from_rgb(20, 16, 12);
/// Inner band per sprite-sheet row, cycled for rows past the end
pub const SPRITE_ROW_ACCENTS: [Color32; 4] = [
    Color32::from_rgb(150, 110, 70),
    Color32::from_rgb(70, 120, 170),
    Color32::from_rgb(170, 70, 70),
    Color32::from_rgb(90, 150, 90),
];

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(250, 200, 60);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

pub fn move_tint() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 110)
}

pub fn capture_tint() -> Color32 {
    Color32::from_rgba_unmultiplied(230, 70, 60, 130)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Disc fill and label color for a piece of `color`
pub fn piece_colors(color: Color) -> (Color32, Color32) {
    match color {
        Color::White => (WHITE_PIECE, WHITE_PIECE_TEXT),
        Color::Black => (BLACK_PIECE, BLACK_PIECE_TEXT),
    }
}

/// Tile shade for a square's sprite frame.
///
/// Frames from the first sheet columns are light stone, the rest dark; the
/// exact cell nudges the brightness so neighbouring tiles don't look flat.
pub fn tile_color(frame: FrameCoords) -> Color32 {
    let [row, col] = frame;
    let base = if col < DARK_FRAME_COLUMN { TILE_LIGHT } else { TILE_DARK };
    let shift = ((col % 3) * 6 + (row % 2) * 3) as u8;
    Color32::from_rgb(
        base.r().saturating_sub(shift),
        base.g().saturating_sub(shift),
        base.b().saturating_sub(shift),
    )
}

/// Frame to draw for a piece: the selected pose when selected, else the idle
/// pose. Pieces with a single frame use it for both.
pub fn piece_frame(sprites: &[FrameCoords], selected: bool) -> Option<FrameCoords> {
    let pose = if selected { 0 } else { 1 };
    sprites.get(pose).or_else(|| sprites.first()).copied()
}

/// Accent for a piece frame. The sheet row picks the hue, the selected
/// column brightens it.
pub fn sprite_accent(frame: FrameCoords) -> Color32 {
    let [row, col] = frame;
    let base = SPRITE_ROW_ACCENTS[row as usize % SPRITE_ROW_ACCENTS.len()];
    if col == 0 {
        Color32::from_rgb(
            base.r().saturating_add(50),
            base.g().saturating_add(50),
            base.b().saturating_add(50),
        )
    } else {
        base
    }
}
