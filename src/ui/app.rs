//! Main application for the Cragspider GUI

use std::sync::Arc;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::error;

use super::board_view::BoardView;
use super::playfield::{GameMode, Opponent, Playfield};
use super::theme::*;
use crate::board::Color;
use crate::config::{AiConfig, GameConfig};
use crate::error::Result;
use crate::rules::{EndReason, Outcome};

/// Main Cragspider application
pub struct CragspiderApp {
    playfield: Playfield,
    board_view: BoardView,
}

impl CragspiderApp {
    pub fn new(config: Arc<GameConfig>, ai_config: Arc<AiConfig>) -> Result<Self> {
        Ok(Self {
            playfield: Playfield::new(config, ai_config, GameMode::default())?,
            board_view: BoardView::default(),
        })
    }

    fn restart(&mut self, mode: GameMode) {
        if let Err(e) = self.playfield.restart(mode) {
            error!(error = %e, ?mode, "could not start new game");
            self.playfield.message = Some(e.to_string());
        }
    }

    /// Use another greedy profile, restarting if a greedy opponent is playing
    fn switch_profile(&mut self, name: &str) {
        if let Err(e) = self.playfield.set_ai_profile(name) {
            error!(error = %e, profile = name, "could not switch ai profile");
            self.playfield.message = Some(e.to_string());
            return;
        }
        if let GameMode::PvE {
            opponent: Opponent::Greedy,
            ..
        } = self.playfield.mode()
        {
            self.restart(self.playfield.mode());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game vs Random AI", Color::White, Opponent::Random),
                        ("New Game vs Greedy AI", Color::White, Opponent::Greedy),
                        ("New Game vs Random AI (as Black)", Color::Black, Opponent::Random),
                        ("New Game vs Greedy AI (as Black)", Color::Black, Opponent::Greedy),
                    ];
                    for (label, human_color, opponent) in modes {
                        if ui.button(label).clicked() {
                            self.restart(GameMode::PvE {
                                human_color,
                                opponent,
                            });
                            ui.close_menu();
                        }
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.restart(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Greedy AI", |ui| {
                    let current = self.playfield.ai_profile().to_string();
                    let profiles: Vec<String> =
                        self.playfield.ai_profiles().into_iter().map(str::to_string).collect();
                    for name in profiles {
                        if ui.radio(current == name, name.as_str()).clicked() && current != name {
                            self.switch_profile(&name);
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let game = self.playfield.game();
                    let mode_text = match self.playfield.mode() {
                        GameMode::PvE { human_color, .. } => format!(
                            "You: {} vs {}",
                            human_color,
                            game.player(human_color.opponent())
                        ),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with turn, captures and status
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CRAGSPIDER").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                for color in Color::ALL {
                    self.render_captures_card(ui, color);
                    ui.add_space(10.0);
                }

                if let Some(result) = self.playfield.game().outcome() {
                    self.render_game_over_card(ui, result);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.playfield.message {
                    render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = self.playfield.game();
        let color = game.active_color();
        let (fill, text) = piece_colors(color);

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.painter().circle_stroke(rect.center(), 18.0, egui::Stroke::new(1.5, text));

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(color.to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (status, status_color) = if game.over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.playfield.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_THINKING)
                    } else {
                        (format!("{} to move", game.active_player()), STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });
            ui.add_space(6.0);
            ui.label(RichText::new(format!("Turn #{}", game.turns() + 1)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Pieces `color` has taken from the opponent
    fn render_captures_card(&self, ui: &mut egui::Ui, color: Color) {
        let captured = self.playfield.game().board().captured_pieces(color);
        Self::card_frame().show(ui, |ui| {
            ui.label(
                RichText::new(format!("CAPTURED BY {}", color.to_string().to_uppercase()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(6.0);
            if captured.is_empty() {
                ui.label(RichText::new("none").size(11.0).color(TEXT_SECONDARY));
            } else {
                ui.horizontal_wrapped(|ui| {
                    for piece in captured {
                        ui.label(RichText::new(piece.name()).size(12.0).color(TEXT_PRIMARY));
                    }
                });
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: Outcome) {
        let reason = match result.reason {
            EndReason::Annihilation => "no pieces left",
            EndReason::Stalemate => "no legal move",
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} WINS", result.winner.to_string().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.label(
                        RichText::new(format!("{} has {}", result.winner.opponent(), reason))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.restart(self.playfield.mode());
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                if let Some(clicked) = self.board_view.show(ui, &self.playfield) {
                    self.playfield.click(clicked);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (escape, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.key_pressed(egui::Key::N)));
        if escape {
            self.playfield.click(None);
        }
        if new_game {
            self.restart(self.playfield.mode());
        }
    }
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(MESSAGE_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
}

impl eframe::App for CragspiderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Collects a finished AI proposal and starts the next worker
        self.playfield.update();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.playfield.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
