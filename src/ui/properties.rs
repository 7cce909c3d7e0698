// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point data panel.
//!
//! This module provides the table of recorded points with an editable
//! comment per row and the CSV export button.

use crate::io::export::HEADERS;
use crate::models::point::PointRecord;

/// Result of data panel interaction.
pub enum PropertiesAction {
    None,
    UpdateComment(usize, String),
    Export,
}

/// Display the point table.
pub fn show(ui: &mut egui::Ui, points: &[PointRecord]) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Data");
    ui.separator();

    if points.is_empty() {
        ui.label(egui::RichText::new("No points recorded yet").weak());
        return action;
    }

    if ui.button("📥 Export CSV...").clicked() {
        action = PropertiesAction::Export;
    }
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("point_table")
            .num_columns(6)
            .striped(true)
            .show(ui, |ui| {
                for header in HEADERS {
                    ui.strong(header);
                }
                ui.end_row();

                for (idx, point) in points.iter().enumerate() {
                    ui.label(point.kind.label());
                    ui.label(point.shape.to_string());
                    ui.label(point.kind.role().map(|r| r.to_string()).unwrap_or_default());
                    ui.monospace(format!("{:.2}", point.coords.x));
                    ui.monospace(format!("{:.2}", point.coords.y));

                    let mut comment = point.comment.clone();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut comment).desired_width(120.0),
                    );
                    if response.changed() {
                        action = PropertiesAction::UpdateComment(idx, comment);
                    }
                    ui.end_row();
                }
            });
    });

    action
}
