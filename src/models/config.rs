// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Capture settings.
//!
//! Settings are edited live from the side panel and can be saved to or
//! loaded from YAML/JSON files.

use crate::error::{MapperError, Result};
use serde::{Deserialize, Serialize};

/// Default width the source image is resized to for display.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1000;

/// How clicks are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureMode {
    #[default]
    SimplePoints,
    /// Pairs of clicks: start (A) then end (B)
    Segments,
}

/// Scaled coordinate system used when scaling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// 0-100 on both axes, origin bottom-left
    Normalized,
    /// 0-max_x / 0-max_y, origin top-left
    #[default]
    Custom,
}

/// Resolved output coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateSystem {
    /// Original image pixels
    Pixels,
    Normalized,
    Custom { max_x: f64, max_y: f64 },
}

/// User-facing capture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub mode: CaptureMode,
    pub use_scale: bool,
    pub scale: ScaleKind,
    pub max_x: f64,
    pub max_y: f64,
    pub display_width: u32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            mode: CaptureMode::SimplePoints,
            use_scale: false,
            scale: ScaleKind::Custom,
            max_x: 100.0,
            max_y: 100.0,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

impl MapperConfig {
    /// Check that every bound is positive.
    pub fn validate(&self) -> Result<()> {
        if self.display_width == 0 {
            return Err(MapperError::InvalidConfig(
                "display_width must be positive".to_string(),
            ));
        }
        if !(self.max_x > 0.0 && self.max_x.is_finite()) {
            return Err(MapperError::InvalidConfig(format!(
                "max_x must be positive, got {}",
                self.max_x
            )));
        }
        if !(self.max_y > 0.0 && self.max_y.is_finite()) {
            return Err(MapperError::InvalidConfig(format!(
                "max_y must be positive, got {}",
                self.max_y
            )));
        }
        Ok(())
    }

    /// The coordinate system new points are recorded in.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        if !self.use_scale {
            return CoordinateSystem::Pixels;
        }
        match self.scale {
            ScaleKind::Normalized => CoordinateSystem::Normalized,
            ScaleKind::Custom => CoordinateSystem::Custom {
                max_x: self.max_x,
                max_y: self.max_y,
            },
        }
    }
}
