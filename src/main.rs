// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PRMA - Precision Mapper
//!
//! A cross-platform desktop application for clicking points and segments
//! on an image and exporting their coordinates as CSV.

mod app;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::MapperApp;
use models::config::MapperConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional settings file as the first argument
    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let config = io::serialization::load_config(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            log::info!("Loaded settings from {}", path.display());
            config
        }
        None => MapperConfig::default(),
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true)
            .with_title("PRMA - Precision Mapper"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PRMA",
        options,
        Box::new(|_cc| Ok(Box::new(MapperApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
