// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CSV export of the point table.

use crate::error::Result;
use crate::models::point::PointRecord;
use serde::Serialize;
use std::path::Path;

/// Column headers, matching the table shown in the data panel.
pub const HEADERS: [&str; 6] = ["Type", "Shape", "Role", "X", "Y", "Comment"];

/// Default file name offered in the save dialog.
pub const DEFAULT_FILE_NAME: &str = "data.csv";

/// One table row, with coordinates pre-formatted to 2 decimals.
#[derive(Debug, Serialize)]
struct Row<'a> {
    kind: &'static str,
    shape: usize,
    role: Option<u8>,
    x: String,
    y: String,
    comment: &'a str,
}

impl<'a> From<&'a PointRecord> for Row<'a> {
    fn from(point: &'a PointRecord) -> Self {
        Self {
            kind: point.kind.label(),
            shape: point.shape,
            role: point.kind.role(),
            x: format!("{:.2}", point.coords.x),
            y: format!("{:.2}", point.coords.y),
            comment: &point.comment,
        }
    }
}

/// Write the header and one row per point, in list order.
pub fn write_points<W: std::io::Write>(points: &[PointRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADERS)?;
    for point in points {
        wtr.serialize(Row::from(point))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the points as a CSV document.
pub fn to_csv_string(points: &[PointRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_points(points, &mut buf)?;
    // The csv writer only emits the UTF-8 we feed it
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Export the points to a CSV file.
pub fn export_csv(points: &[PointRecord], path: &Path) -> Result<()> {
    std::fs::write(path, to_csv_string(points)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::{PixelPos, Point, PointKind};

    fn record(kind: PointKind, shape: usize, x: f64, y: f64, comment: &str) -> PointRecord {
        let mut record = PointRecord::new(kind, shape, PixelPos::new(0, 0), Point::new(x, y));
        record.comment = comment.to_string();
        record
    }

    #[test]
    fn test_export_two_points() {
        let points = vec![
            record(PointKind::Point, 1, 10.0, 20.0, ""),
            record(PointKind::Point, 2, 30.0, 40.0, "note"),
        ];

        let csv = to_csv_string(&points).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Type,Shape,Role,X,Y,Comment");
        assert_eq!(lines[1], "Point,1,,10.00,20.00,");
        assert_eq!(lines[2], "Point,2,,30.00,40.00,note");
    }

    #[test]
    fn test_export_segments_and_quoting() {
        let points = vec![
            record(PointKind::A, 1, 0.5, 99.999, "start, left"),
            record(PointKind::B, 1, 1.0, 2.345, ""),
        ];

        let csv = to_csv_string(&points).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[1], "A,1,0,0.50,100.00,\"start, left\"");
        assert!(lines[2].starts_with("B,1,1,1.00,"));
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv, "Type,Shape,Role,X,Y,Comment\n");
    }

    #[test]
    fn test_export_file() {
        let path = std::env::temp_dir().join("prma-export-test.csv");
        let points = vec![record(PointKind::Point, 1, 1.0, 2.0, "é")];

        export_csv(&points, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("Point,1,,1.00,2.00,é\n"));
        let _ = std::fs::remove_file(&path);
    }
}
