// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate transformations between display
//! pixels, original image pixels, and the exported coordinate systems.

use crate::models::point::Point;

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the display size for an image resized to `display_width`.
///
/// Returns `(display_width, display_height, ratio)` where
/// `ratio = display_width / width`. The height keeps the aspect ratio and
/// is at least one pixel.
pub fn display_size(width: u32, height: u32, display_width: u32) -> (u32, u32, f64) {
    let ratio = display_width as f64 / width as f64;
    let display_height = ((height as f64 * ratio).round() as u32).max(1);
    (display_width, display_height, ratio)
}

/// Map a display-space position back to original image pixels.
pub fn display_to_original(point: Point, ratio: f64) -> Point {
    Point::new(point.x / ratio, point.y / ratio)
}

/// Map an original image pixel position to display space.
#[allow(dead_code)]
pub fn original_to_display(point: Point, ratio: f64) -> Point {
    Point::new(point.x * ratio, point.y * ratio)
}

/// Convert a display-space position to 0-100 coordinates with the origin
/// at the bottom-left corner.
pub fn normalize_display(point: Point, display_width: u32, display_height: u32) -> Point {
    Point::new(
        point.x / display_width as f64 * 100.0,
        (1.0 - point.y / display_height as f64) * 100.0,
    )
}

/// Scale an original-space position so the image spans `0..max_x` by
/// `0..max_y` (origin top-left).
pub fn scale_original(point: Point, width: u32, height: u32, max_x: f64, max_y: f64) -> Point {
    Point::new(
        point.x / width as f64 * max_x,
        point.y / height as f64 * max_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_original_roundtrip() {
        let (_, _, ratio) = display_size(1920, 1080, 1000);
        let original = Point::new(960.0, 540.0);

        let back = display_to_original(original_to_display(original, ratio), ratio);

        assert!((round2(back.x) - original.x).abs() < 0.01);
        assert!((round2(back.y) - original.y).abs() < 0.01);
    }

    #[test]
    fn test_display_size_keeps_aspect() {
        assert_eq!(display_size(2000, 1000, 1000), (1000, 500, 0.5));
        let (w, h, _) = display_size(3000, 1001, 1000);
        assert_eq!((w, h), (1000, 334));
        // Extremely wide images keep at least one row
        let (_, h, _) = display_size(100_000, 1, 1000);
        assert_eq!(h, 1);
    }

    #[test]
    fn test_normalize_corners() {
        let center = normalize_display(Point::new(500.0, 250.0), 1000, 500);
        assert_eq!(round2(center.x), 50.0);
        assert_eq!(round2(center.y), 50.0);

        // Top-left
        let tl = normalize_display(Point::new(0.0, 0.0), 1000, 500);
        assert_eq!(round2(tl.x), 0.0);
        assert_eq!(round2(tl.y), 100.0);

        // Bottom-left
        let bl = normalize_display(Point::new(0.0, 500.0), 1000, 500);
        assert_eq!(round2(bl.y), 0.0);
    }

    #[test]
    fn test_scale_original() {
        let p = scale_original(Point::new(500.0, 250.0), 2000, 1000, 10.0, 4.0);
        assert_eq!(p, Point::new(2.5, 1.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-0.004), 0.0);
    }
}
