// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Media image traits for sector-addressed disk and disc images.

use std::path::Path;

use crate::error::DiscatError;
use crate::traits::filter::{DataStream, ReadSeek};
use crate::traits::plugin::Plugin;
use crate::types::ImageInfo;

/// Reader for a sector-addressed media image format.
pub trait MediaImage: Plugin {
    /// Returns true if the stream holds an image of this format.
    fn identify(&mut self, stream: &mut dyn ReadSeek) -> bool;

    /// Opens the image, taking ownership of the stream.
    fn open(&mut self, stream: DataStream) -> Result<(), DiscatError>;

    /// Information about the opened image.
    fn info(&self) -> &ImageInfo;

    /// Reads one sector of the opened image.
    fn read_sector(&mut self, address: u64) -> Result<Vec<u8>, DiscatError>;
}

/// Media image format that can also be written.
pub trait WritableImage: MediaImage {
    /// File extensions this format is usually stored with.
    fn extensions(&self) -> &[&str];

    /// Creates a new, empty image at `path`.
    fn create(&mut self, path: &Path, info: &ImageInfo) -> Result<(), DiscatError>;

    /// Writes one sector of the image being created.
    fn write_sector(&mut self, address: u64, data: &[u8]) -> Result<(), DiscatError>;

    /// Flushes and closes the image being created.
    fn close(&mut self) -> Result<(), DiscatError>;
}
