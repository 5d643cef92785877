// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filter trait for stream transforms applied before format detection
//! (compression, container unwrapping, split files).

use std::io::{Read, Seek};
use std::path::Path;

use crate::error::DiscatError;
use crate::traits::plugin::Plugin;

/// A readable, seekable byte stream handed between plugins.
pub trait ReadSeek: Read + Seek + Send + Sync {}

impl<T: Read + Seek + Send + Sync> ReadSeek for T {}

/// Owned stream produced by a filter and consumed by image plugins.
pub type DataStream = Box<dyn ReadSeek>;

/// Stream transform plugin. Filters are stateless and shared process-wide.
pub trait Filter: Plugin {
    /// Returns true if this filter understands the file at `path`.
    fn identify(&self, path: &Path) -> bool;

    /// Opens `path` and returns the transformed stream.
    fn open(&self, path: &Path) -> Result<DataStream, DiscatError>;
}
