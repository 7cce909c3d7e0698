// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point record data structures.
//!
//! This module defines the recorded click, its classification within a
//! segment, and the coordinates exported for it.

use super::config::CaptureMode;
use serde::{Deserialize, Serialize};

/// A 2D point in exported coordinates (pixels, percent or custom scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel position on the display image, as reported by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: u32,
    pub y: u32,
}

impl PixelPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Classification of a recorded point.
///
/// `A` is the start of a segment and `B` its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Point,
    A,
    B,
}

impl PointKind {
    /// Classify the point that will land at `index` in the list.
    ///
    /// Returns the kind and the 1-based shape number.
    pub fn classify(mode: CaptureMode, index: usize) -> (Self, usize) {
        match mode {
            CaptureMode::SimplePoints => (PointKind::Point, index + 1),
            CaptureMode::Segments => {
                let kind = if index % 2 == 0 { PointKind::A } else { PointKind::B };
                (kind, index / 2 + 1)
            }
        }
    }

    /// Label shown in the table and the CSV.
    pub fn label(&self) -> &'static str {
        match self {
            PointKind::Point => "Point",
            PointKind::A => "A",
            PointKind::B => "B",
        }
    }

    /// Position within the segment, if this is a segment endpoint.
    pub fn role(&self) -> Option<u8> {
        match self {
            PointKind::Point => None,
            PointKind::A => Some(0),
            PointKind::B => Some(1),
        }
    }
}

/// One recorded click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub kind: PointKind,
    /// 1-based point or segment number
    pub shape: usize,
    /// Where the click landed on the display image
    pub click: PixelPos,
    /// Coordinates in the configured output system, rounded to 2 decimals
    pub coords: Point,
    pub comment: String,
}

impl PointRecord {
    pub fn new(kind: PointKind, shape: usize, click: PixelPos, coords: Point) -> Self {
        Self {
            kind,
            shape,
            click,
            coords,
            comment: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_points_numbered_sequentially() {
        for i in 0..5 {
            let (kind, shape) = PointKind::classify(CaptureMode::SimplePoints, i);
            assert_eq!(kind, PointKind::Point);
            assert_eq!(shape, i + 1);
        }
    }

    #[test]
    fn test_segment_roles_alternate() {
        for i in 0..9 {
            let (kind, shape) = PointKind::classify(CaptureMode::Segments, i);
            assert_eq!(kind.role() == Some(0), i % 2 == 0);
            assert_eq!(shape, i / 2 + 1);
        }
        assert_eq!(PointKind::classify(CaptureMode::Segments, 3), (PointKind::B, 2));
    }

    #[test]
    fn test_labels() {
        assert_eq!(PointKind::Point.label(), "Point");
        assert_eq!(PointKind::Point.role(), None);
        assert_eq!(PointKind::B.label(), "B");
    }
}
