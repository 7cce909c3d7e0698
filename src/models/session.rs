// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state management.
//!
//! A [`Session`] owns the loaded image and the ordered list of recorded
//! points. Each application window owns exactly one session; handlers get
//! it by reference.

use super::config::{CoordinateSystem, MapperConfig};
use super::point::{Point, PointKind, PixelPos, PointRecord};
use crate::error::{MapperError, Result};
use crate::util::geometry;
use image::{imageops, imageops::FilterType, RgbImage};

/// An uploaded image together with its resized display copy.
#[derive(Debug, Clone)]
pub struct ImageSession {
    /// File name the image was loaded from
    pub name: String,
    original_size: (u32, u32),
    display: RgbImage,
    ratio: f64,
}

impl ImageSession {
    /// Resize `original` to `display_width`, keeping its aspect ratio.
    pub fn new(name: impl Into<String>, original: &RgbImage, display_width: u32) -> Result<Self> {
        let (width, height) = original.dimensions();
        if width == 0 || height == 0 || display_width == 0 {
            return Err(MapperError::EmptyImage);
        }

        let (display_width, display_height, ratio) =
            geometry::display_size(width, height, display_width);
        let display = imageops::resize(original, display_width, display_height, FilterType::Lanczos3);

        Ok(Self {
            name: name.into(),
            original_size: (width, height),
            display,
            ratio,
        })
    }

    /// Original image dimensions (W, H).
    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    /// Display image dimensions.
    pub fn display_size(&self) -> (u32, u32) {
        self.display.dimensions()
    }

    /// Resized image that clicks are reported against.
    pub fn display(&self) -> &RgbImage {
        &self.display
    }

    /// Whether a click lies on the display image (edges inclusive).
    pub fn contains(&self, click: PixelPos) -> bool {
        let (w, h) = self.display_size();
        click.x <= w && click.y <= h
    }

    /// Convert a display click to exported coordinates, rounded to 2 decimals.
    pub fn transform(&self, click: PixelPos, system: CoordinateSystem) -> Point {
        let display = Point::new(click.x as f64, click.y as f64);
        let (width, height) = self.original_size;

        let p = match system {
            CoordinateSystem::Pixels => geometry::display_to_original(display, self.ratio),
            CoordinateSystem::Normalized => {
                let (dw, dh) = self.display_size();
                geometry::normalize_display(display, dw, dh)
            }
            CoordinateSystem::Custom { max_x, max_y } => {
                let original = geometry::display_to_original(display, self.ratio);
                geometry::scale_original(original, width, height, max_x, max_y)
            }
        };

        Point::new(geometry::round2(p.x), geometry::round2(p.y))
    }
}

/// Result of feeding a click into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A record was appended at this index
    Added(usize),
    /// Same pixel as the last recorded point
    Duplicate,
    OutOfBounds,
    NoImage,
}

/// Coarse state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoImage,
    HasImage,
    HasPoints,
}

/// Image plus recorded points for one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<ImageSession>,
    points: Vec<PointRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageSession> {
        self.image.as_ref()
    }

    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    pub fn state(&self) -> SessionState {
        match (&self.image, self.points.is_empty()) {
            (None, _) => SessionState::NoImage,
            (Some(_), true) => SessionState::HasImage,
            (Some(_), false) => SessionState::HasPoints,
        }
    }

    /// Install a newly uploaded image, clearing any recorded points.
    ///
    /// `None` (nothing was picked) leaves the session untouched and
    /// returns `false`.
    pub fn set_image(&mut self, image: Option<ImageSession>) -> bool {
        let Some(image) = image else {
            return false;
        };

        log::info!(
            "Loaded image {} ({}x{} -> {}x{}), cleared {} points",
            image.name,
            image.original_size.0,
            image.original_size.1,
            image.display.width(),
            image.display.height(),
            self.points.len()
        );
        self.image = Some(image);
        self.points.clear();
        true
    }

    /// Drop the image and every recorded point.
    pub fn reset(&mut self) {
        self.image = None;
        self.points.clear();
        log::info!("Session reset");
    }

    /// Remove the most recent point, if any.
    pub fn undo_last(&mut self) -> Option<PointRecord> {
        let removed = self.points.pop();
        if removed.is_some() {
            log::info!("Undo, {} points remain", self.points.len());
        }
        removed
    }

    /// Record a click at display position `click`.
    pub fn capture(&mut self, click: PixelPos, config: &MapperConfig) -> CaptureOutcome {
        let Some(ref image) = self.image else {
            log::debug!("Ignoring click at ({}, {}) with no image", click.x, click.y);
            return CaptureOutcome::NoImage;
        };

        if !image.contains(click) {
            log::warn!("Ignoring click outside the image at ({}, {})", click.x, click.y);
            return CaptureOutcome::OutOfBounds;
        }

        if self.points.last().is_some_and(|last| last.click == click) {
            log::debug!("Ignoring repeated click at ({}, {})", click.x, click.y);
            return CaptureOutcome::Duplicate;
        }

        let index = self.points.len();
        let (kind, shape) = PointKind::classify(config.mode, index);
        let coords = image.transform(click, config.coordinate_system());
        self.points.push(PointRecord::new(kind, shape, click, coords));

        log::info!(
            "Recorded {} #{} at ({}, {}) -> ({:.2}, {:.2}), total: {}",
            kind.label(),
            shape,
            click.x,
            click.y,
            coords.x,
            coords.y,
            self.points.len()
        );
        CaptureOutcome::Added(index)
    }

    /// Replace the comment of the point at row `index`.
    pub fn update_comment(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(MapperError::IndexOutOfRange { index, len })?;
        point.comment = text.into();
        Ok(())
    }
}
