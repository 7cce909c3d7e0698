// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes uploaded PNG/JPEG content into an RGB buffer and
//! prepares the resized copy used for display.

use crate::error::Result;
use crate::models::session::ImageSession;
use image::RgbImage;
use std::path::Path;

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decode image file content into an RGB buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Decode `bytes` and build a display-ready image session.
pub fn load_image_bytes(name: &str, bytes: &[u8], display_width: u32) -> Result<ImageSession> {
    let original = decode_image(bytes)?;
    ImageSession::new(name, &original, display_width)
}

/// Read and decode an image file from disk.
pub fn load_image(path: &Path, display_width: u32) -> Result<ImageSession> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_image_bytes(&name, &bytes, display_width)
}
