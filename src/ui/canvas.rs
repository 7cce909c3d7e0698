// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and point capture.
//!
//! This module shows the rendered overlay at its display size and turns
//! mouse clicks into display-pixel positions.

use crate::models::config::CaptureMode;
use crate::models::point::PixelPos;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    Click(PixelPos),
    OpenImage,
}

/// Map a pointer position inside `rect` to a pixel on an image of
/// `image_size` drawn into that rect.
pub fn to_display_pixel(pos: egui::Pos2, rect: egui::Rect, image_size: (u32, u32)) -> Option<PixelPos> {
    if !rect.contains(pos) || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let (w, h) = image_size;
    let rel_x = (pos.x - rect.min.x) / rect.width();
    let rel_y = (pos.y - rect.min.y) / rect.height();
    let x = ((rel_x * w as f32).floor() as u32).min(w.saturating_sub(1));
    let y = ((rel_y * h as f32).floor() as u32).min(h.saturating_sub(1));
    Some(PixelPos::new(x, y))
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    view: &Option<egui::TextureHandle>,
    display_size: Option<(u32, u32)>,
    mode: CaptureMode,
    point_count: usize,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size() - egui::vec2(0.0, 30.0);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size.max(egui::Vec2::ZERO));

        match (view, display_size) {
            (Some(texture), Some((width, height))) => {
                egui::ScrollArea::both().show(ui, |ui| {
                    // Shown at one display pixel per point so clicks map 1:1
                    let size = egui::vec2(width as f32, height as f32);
                    let (image_rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

                    ui.painter().image(
                        texture.id(),
                        image_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if let Some(pixel) = to_display_pixel(pos, image_rect, (width, height)) {
                                action = CanvasAction::Click(pixel);
                            }
                        }
                    }

                    let _ = response.on_hover_cursor(egui::CursorIcon::Crosshair);
                });
            }
            _ => {
                // Show welcome message when no image is loaded
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.heading(
                            egui::RichText::new("PRMA")
                                .size(32.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                        ui.label(
                            egui::RichText::new("Precision Mapper")
                                .size(14.0)
                                .color(egui::Color32::from_gray(150)),
                        );
                        ui.add_space(20.0);
                        if ui.button("Open Image...").clicked() {
                            action = CanvasAction::OpenImage;
                        }
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new("or drop a PNG/JPEG file onto the window")
                                .weak()
                                .color(egui::Color32::from_gray(130)),
                        );
                    });
                });
            }
        }
    });

    // Display current mode info at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        let hint = match mode {
            CaptureMode::SimplePoints => "Click to record a point",
            CaptureMode::Segments => {
                if point_count % 2 == 0 {
                    "Click the start (A) of a segment"
                } else {
                    "Click the end (B) of the segment"
                }
            }
        };
        ui.label(hint);
        ui.separator();
        if display_size.is_some() {
            ui.label(format!("{} points", point_count));
        } else {
            ui.label("No image loaded");
        }
    });

    action
}
