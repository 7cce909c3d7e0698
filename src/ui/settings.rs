// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings side panel.
//!
//! This module provides the controls for capture mode, coordinate scaling
//! and the session buttons (undo, change image, reset).

use crate::models::config::{CaptureMode, MapperConfig, ScaleKind};
use crate::models::session::SessionState;

/// Result of settings panel interaction.
pub enum SettingsAction {
    None,
    UndoLast,
    ChangeImage,
    Reset,
}

/// Display the settings panel. Edits are applied to `config` directly.
pub fn show(ui: &mut egui::Ui, config: &mut MapperConfig, state: SessionState) -> SettingsAction {
    let mut action = SettingsAction::None;

    ui.heading("Settings");
    ui.separator();

    ui.label("Mode");
    ui.radio_value(&mut config.mode, CaptureMode::SimplePoints, "Simple points");
    ui.radio_value(&mut config.mode, CaptureMode::Segments, "Segments (A → B)");

    ui.separator();

    ui.checkbox(&mut config.use_scale, "Enable scale");
    ui.add_enabled_ui(config.use_scale, |ui| {
        ui.radio_value(&mut config.scale, ScaleKind::Custom, "Custom max");
        ui.radio_value(&mut config.scale, ScaleKind::Normalized, "Normalized 0-100 (Y up)");

        ui.add_enabled_ui(config.scale == ScaleKind::Custom, |ui| {
            egui::Grid::new("scale_bounds").num_columns(2).show(ui, |ui| {
                ui.label("Max X");
                ui.add(
                    egui::DragValue::new(&mut config.max_x)
                        .speed(1.0)
                        .clamp_range(0.01..=f64::MAX),
                );
                ui.end_row();

                ui.label("Max Y");
                ui.add(
                    egui::DragValue::new(&mut config.max_y)
                        .speed(1.0)
                        .clamp_range(0.01..=f64::MAX),
                );
                ui.end_row();
            });
        });
    });

    let hint = if config.use_scale {
        "Applies to points recorded from now on"
    } else {
        "Coordinates in original image pixels"
    };
    ui.label(egui::RichText::new(hint).italics().weak());

    ui.separator();

    let has_points = state == SessionState::HasPoints;
    let has_image = state != SessionState::NoImage;

    if ui
        .add_enabled(has_points, egui::Button::new("↩ Undo last point"))
        .clicked()
    {
        action = SettingsAction::UndoLast;
    }
    if ui
        .add_enabled(has_image, egui::Button::new("🖼 Change image"))
        .clicked()
    {
        action = SettingsAction::ChangeImage;
    }
    if ui.button("🔄 Reset").clicked() {
        action = SettingsAction::Reset;
    }

    action
}
