// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for image loading, point editing and export.

use thiserror::Error;

/// Errors that can occur while mapping points on an image.
#[derive(Error, Debug)]
pub enum MapperError {
    /// The uploaded file could not be decoded as an image
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] image::ImageError),

    /// The decoded image has no pixels
    #[error("Invalid image: zero width or height")]
    EmptyImage,

    /// A table row was addressed that does not exist
    #[error("Row {index} is out of range (table has {len} rows)")]
    IndexOutOfRange {
        /// Requested row
        index: usize,
        /// Number of rows in the table
        len: usize,
    },

    /// A configuration value violates its bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for mapper operations.
pub type Result<T> = std::result::Result<T, MapperError>;
