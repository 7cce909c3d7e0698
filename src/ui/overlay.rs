// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation overlay rendering.
//!
//! Draws markers for recorded points and lines for completed segments on a
//! copy of the display image. Rendering never touches the session, so the
//! same state always produces the same picture.

use crate::models::point::{PointKind, PointRecord};
use crate::models::session::Session;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

pub const MARKER_RADIUS: i32 = 5;
pub const LINE_WIDTH: i32 = 3;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Marker fill color for a point.
pub fn marker_color(kind: PointKind) -> Rgb<u8> {
    match kind {
        PointKind::Point | PointKind::B => RED,
        PointKind::A => GREEN,
    }
}

/// Render the display image with every recorded point drawn on top.
///
/// Returns `None` when no image is loaded.
pub fn render(session: &Session) -> Option<RgbImage> {
    let image = session.image()?;
    let mut canvas = image.display().clone();
    let points = session.points();

    for pair in points.chunks_exact(2) {
        if pair[0].kind == PointKind::A && pair[1].kind == PointKind::B {
            draw_segment(&mut canvas, &pair[0], &pair[1]);
        }
    }

    for point in points {
        draw_marker(&mut canvas, point);
    }

    Some(canvas)
}

fn draw_marker(canvas: &mut RgbImage, point: &PointRecord) {
    let center = (point.click.x as i32, point.click.y as i32);
    draw_filled_circle_mut(canvas, center, MARKER_RADIUS + 1, WHITE);
    draw_filled_circle_mut(canvas, center, MARKER_RADIUS, marker_color(point.kind));
}

/// Draw a thick line as parallel one-pixel strokes offset along the normal.
fn draw_segment(canvas: &mut RgbImage, start: &PointRecord, end: &PointRecord) {
    let (x0, y0) = (start.click.x as f32, start.click.y as f32);
    let (x1, y1) = (end.click.x as f32, end.click.y as f32);

    let (dx, dy) = (x1 - x0, y1 - y0);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return;
    }
    let (nx, ny) = (-dy / len, dx / len);

    let half = LINE_WIDTH / 2;
    for offset in -half..=half {
        let o = offset as f32;
        draw_line_segment_mut(
            canvas,
            (x0 + nx * o, y0 + ny * o),
            (x1 + nx * o, y1 + ny * o),
            YELLOW,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{CaptureMode, MapperConfig};
    use crate::models::point::PixelPos;
    use crate::models::session::ImageSession;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn session() -> Session {
        let image = ImageSession::new("black.png", &RgbImage::new(100, 100), 100).unwrap();
        let mut session = Session::new();
        session.set_image(Some(image));
        session
    }

    #[test]
    fn test_no_image_renders_nothing() {
        assert!(render(&Session::new()).is_none());
    }

    #[test]
    fn test_empty_list_renders_plain_image() {
        let session = session();
        let canvas = render(&session).unwrap();
        assert_eq!(&canvas, session.image().unwrap().display());
    }

    #[test]
    fn test_point_markers() {
        let mut session = session();
        session.capture(PixelPos::new(20, 20), &MapperConfig::default());

        let canvas = render(&session).unwrap();

        assert_eq!(canvas.get_pixel(20, 20), &RED);
        assert_eq!(canvas.get_pixel(20 + MARKER_RADIUS as u32 + 1, 20), &WHITE);
        assert_eq!(canvas.get_pixel(50, 50), &BLACK);
    }

    #[test]
    fn test_segment_colors_and_line() {
        let mut session = session();
        let config = MapperConfig {
            mode: CaptureMode::Segments,
            ..Default::default()
        };
        session.capture(PixelPos::new(10, 50), &config);
        session.capture(PixelPos::new(90, 50), &config);
        // Unpaired start gets a marker but no line
        session.capture(PixelPos::new(50, 90), &config);

        let canvas = render(&session).unwrap();

        assert_eq!(canvas.get_pixel(10, 50), &GREEN);
        assert_eq!(canvas.get_pixel(90, 50), &RED);
        assert_eq!(canvas.get_pixel(50, 50), &YELLOW);
        assert_eq!(canvas.get_pixel(50, 49), &YELLOW);
        assert_eq!(canvas.get_pixel(50, 51), &YELLOW);
        assert_eq!(canvas.get_pixel(50, 90), &GREEN);
        assert_eq!(canvas.get_pixel(50, 75), &BLACK);
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut session = session();
        session.capture(PixelPos::new(30, 40), &MapperConfig::default());
        let before = session.points().to_vec();

        let first = render(&session).unwrap();
        let second = render(&session).unwrap();

        assert_eq!(first, second);
        assert_eq!(session.points(), before.as_slice());
    }
}
