//! Cragspider GUI
//!
//! Loads the piece catalog and AI profiles, then opens the game window.
//! `CRAGSPIDER_CONFIG` and `CRAGSPIDER_AI_CONFIG` point at YAML files that
//! replace the built-in data.

use std::env;
use std::process;
use std::sync::Arc;

use cragspider::ui::CragspiderApp;
use cragspider::{AiConfig, GameConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if env::var_os("DEBUG").is_some() {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_configs() -> cragspider::Result<(GameConfig, AiConfig)> {
    let game = match env::var_os("CRAGSPIDER_CONFIG") {
        Some(path) => {
            info!(path = ?path, "loading game config");
            GameConfig::load(path)?
        }
        None => GameConfig::embedded()?,
    };
    let ai = match env::var_os("CRAGSPIDER_AI_CONFIG") {
        Some(path) => {
            info!(path = ?path, "loading ai config");
            AiConfig::load(path)?
        }
        None => AiConfig::embedded()?,
    };
    Ok((game, ai))
}

fn main() -> Result<(), eframe::Error> {
    init_logging();

    // The game cannot run without its rule data
    let (config, ai_config) = match load_configs() {
        Ok(configs) => configs,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            process::exit(1);
        }
    };
    let app = match CragspiderApp::new(Arc::new(config), Arc::new(ai_config)) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to set up the board");
            process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Cragspider"),
        ..Default::default()
    };

    eframe::run_native("Cragspider", options, Box::new(|_cc| Ok(Box::new(app))))
}
