// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the capture settings and the session, routes
//! panel actions into session operations, and re-renders the overlay after
//! every accepted change.

use crate::io::{export, media, serialization};
use crate::models::{
    config::MapperConfig,
    session::{CaptureOutcome, ImageSession, Session},
};
use crate::ui::{canvas, overlay, properties, settings};
use std::path::PathBuf;

/// Main application state.
pub struct MapperApp {
    /// Capture settings, editable from the side panel
    config: MapperConfig,

    /// Loaded image and recorded points
    session: Session,

    /// Rendered overlay uploaded for display
    view: Option<egui::TextureHandle>,

    /// Set by every accepted transition; cleared by the render step
    needs_render: bool,

    /// Last message shown in the status line
    status: Option<String>,
}

impl Default for MapperApp {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl MapperApp {
    /// Create a new application instance with the given settings.
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            view: None,
            needs_render: true,
            status: None,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Install a decoded image, or report why it could not be loaded.
    fn install_image(&mut self, loaded: crate::error::Result<ImageSession>) {
        match loaded {
            Ok(image) => {
                let name = image.name.clone();
                if self.session.set_image(Some(image)) {
                    self.needs_render = true;
                    self.set_status(format!("Loaded {}", name));
                }
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
                self.set_status(format!("{}. Please choose another image.", e));
            }
        }
    }

    /// Ask for an image file and load it.
    fn open_image_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.open_image(path);
        }
    }

    fn open_image(&mut self, path: PathBuf) {
        let loaded = media::load_image(&path, self.config.display_width);
        self.install_image(loaded);
    }

    /// Load the first usable file dropped onto the window.
    fn open_dropped(&mut self, files: Vec<egui::DroppedFile>) {
        let Some(file) = files.into_iter().next() else {
            return;
        };

        if let Some(bytes) = file.bytes {
            let loaded = media::load_image_bytes(&file.name, &bytes, self.config.display_width);
            self.install_image(loaded);
        } else if let Some(path) = file.path {
            self.open_image(path);
        }
    }

    fn undo_last(&mut self) {
        if self.session.undo_last().is_some() {
            self.needs_render = true;
        } else {
            self.set_status("Nothing to undo");
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.needs_render = true;
        self.set_status("Session reset");
    }

    fn capture(&mut self, click: crate::models::point::PixelPos) {
        if let CaptureOutcome::Added(_) = self.session.capture(click, &self.config) {
            self.needs_render = true;
        }
    }

    fn update_comment(&mut self, index: usize, text: String) {
        if let Err(e) = self.session.update_comment(index, text) {
            log::warn!("Comment not saved: {}", e);
        }
    }

    /// Export the point table to a CSV file.
    fn export_csv(&mut self) {
        if self.session.points().is_empty() {
            self.set_status("No points to export");
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(export::DEFAULT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match export::export_csv(self.session.points(), &path) {
            Ok(()) => {
                log::info!(
                    "Exported {} points to {}",
                    self.session.points().len(),
                    path.display()
                );
                self.set_status(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export points: {}", e);
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }

    fn load_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Settings", &["yaml", "yml", "json"])
            .pick_file()
        else {
            return;
        };

        match serialization::load_config(&path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                self.config = config;
                self.set_status("Settings loaded");
            }
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                self.set_status(format!("Could not load settings: {}", e));
            }
        }
    }

    fn save_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("YAML", &["yaml", "yml"])
            .add_filter("JSON", &["json"])
            .set_file_name("settings.yaml")
            .save_file()
        else {
            return;
        };

        match serialization::save_config(&self.config, &path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => {
                log::error!("Failed to save settings: {}", e);
                self.set_status(format!("Could not save settings: {}", e));
            }
        }
    }

    /// Render the overlay and upload it as the display texture.
    fn refresh_view(&mut self, ctx: &egui::Context) {
        self.needs_render = false;

        let Some(rendered) = overlay::render(&self.session) else {
            self.view = None;
            return;
        };

        let size = [rendered.width() as usize, rendered.height() as usize];
        let color_image = egui::ColorImage::from_rgb(size, rendered.as_raw());
        match self.view {
            Some(ref mut texture) => texture.set(color_image, egui::TextureOptions::NEAREST),
            None => {
                self.view = Some(ctx.load_texture(
                    "overlay",
                    color_image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
    }
}

impl eframe::App for MapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Files dropped onto the window
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.open_dropped(dropped);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        ui.close_menu();
                        self.open_image_dialog();
                    }
                    let has_points = !self.session.points().is_empty();
                    if ui
                        .add_enabled(has_points, egui::Button::new("Export CSV..."))
                        .clicked()
                    {
                        ui.close_menu();
                        self.export_csv();
                    }
                    ui.separator();
                    if ui.button("Load Settings...").clicked() {
                        ui.close_menu();
                        self.load_settings();
                    }
                    if ui.button("Save Settings...").clicked() {
                        ui.close_menu();
                        self.save_settings();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let can_undo = !self.session.points().is_empty();
                    if ui
                        .add_enabled(can_undo, egui::Button::new("Undo last point (Ctrl+Z)"))
                        .clicked()
                    {
                        self.undo_last();
                        ui.close_menu();
                    }
                    if ui.button("Reset").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });
            });
        });

        // Status line
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| match (&self.status, self.session.image()) {
                (Some(message), _) => {
                    ui.label(message);
                }
                (None, Some(image)) => {
                    let (w, h) = image.original_size();
                    ui.label(format!("{} ({}x{})", image.name, w, h));
                }
                (None, None) => {
                    ui.label("Ready");
                }
            });
        });

        // Settings panel (left side)
        let state = self.session.state();
        let settings_action = egui::SidePanel::left("settings")
            .default_width(220.0)
            .show(ctx, |ui| settings::show(ui, &mut self.config, state))
            .inner;

        match settings_action {
            settings::SettingsAction::UndoLast => self.undo_last(),
            settings::SettingsAction::ChangeImage => {
                self.reset();
                self.open_image_dialog();
            }
            settings::SettingsAction::Reset => self.reset(),
            settings::SettingsAction::None => {}
        }

        // Data panel (right side)
        let properties_action = egui::SidePanel::right("data")
            .default_width(380.0)
            .show(ctx, |ui| properties::show(ui, self.session.points()))
            .inner;

        match properties_action {
            properties::PropertiesAction::UpdateComment(idx, text) => self.update_comment(idx, text),
            properties::PropertiesAction::Export => self.export_csv(),
            properties::PropertiesAction::None => {}
        }

        // Handle undo (Ctrl+Z) unless a comment field is being edited
        if !ctx.wants_keyboard_input()
            && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Z))
        {
            self.undo_last();
        }

        if self.needs_render {
            self.refresh_view(ctx);
        }

        // Main canvas (center)
        let display_size = self.session.image().map(|image| image.display_size());
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &self.view,
                    display_size,
                    self.config.mode,
                    self.session.points().len(),
                )
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::Click(pixel) => self.capture(pixel),
            canvas::CanvasAction::OpenImage => self.open_image_dialog(),
            canvas::CanvasAction::None => {}
        }

        // Render the click this frame rather than waiting for the next input
        if self.needs_render {
            self.refresh_view(ctx);
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::PixelPos;
    use image::RgbImage;

    fn app_with_image() -> MapperApp {
        let mut app = MapperApp::default();
        let image = ImageSession::new("test.png", &RgbImage::new(20, 10), 10);
        app.install_image(image);
        app
    }

    #[test]
    fn test_invalid_image_keeps_session() {
        let mut app = app_with_image();
        app.capture(PixelPos::new(1, 1));

        app.install_image(media::load_image_bytes("bad.png", b"garbage", 1000));

        assert_eq!(app.session.points().len(), 1);
        assert!(app.status.as_deref().unwrap().contains("Invalid image"));
    }

    #[test]
    fn test_accepted_transitions_request_render() {
        let mut app = app_with_image();
        app.needs_render = false;

        app.capture(PixelPos::new(1, 1));
        assert!(app.needs_render);

        app.needs_render = false;
        app.capture(PixelPos::new(1, 1));
        assert!(!app.needs_render, "duplicate click must not re-render");

        app.undo_last();
        assert!(app.needs_render);
    }

    #[test]
    fn test_empty_state_operations_are_informational() {
        let mut app = app_with_image();

        app.undo_last();
        assert_eq!(app.status.as_deref(), Some("Nothing to undo"));

        app.export_csv();
        assert_eq!(app.status.as_deref(), Some("No points to export"));
    }

    #[test]
    fn test_comment_edit_reaches_export() {
        let mut app = app_with_image();
        app.capture(PixelPos::new(1, 1));
        app.capture(PixelPos::new(2, 2));

        app.update_comment(1, "peak".to_string());
        app.update_comment(7, "ignored".to_string());

        let csv = export::to_csv_string(app.session.points()).unwrap();
        assert!(csv.lines().nth(2).unwrap().ends_with(",peak"));
    }
}
