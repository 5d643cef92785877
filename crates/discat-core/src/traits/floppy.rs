// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Floppy image traits.

use std::path::Path;

use crate::error::DiscatError;
use crate::traits::filter::ReadSeek;
use crate::traits::plugin::Plugin;
use crate::types::FloppyGeometry;

/// Reader for a floppy image format. Instances are shared, so every
/// operation works on the stream it is given.
pub trait FloppyImage: Plugin {
    /// Returns true if the stream holds a floppy image of this format.
    fn identify(&self, stream: &mut dyn ReadSeek) -> bool;

    /// Reads the physical geometry recorded in the image.
    fn geometry(&self, stream: &mut dyn ReadSeek) -> Result<FloppyGeometry, DiscatError>;
}

/// Floppy image format that can also be written.
pub trait WritableFloppyImage: FloppyImage {
    /// Creates an empty, formatted floppy image at `path`.
    fn create(&self, path: &Path, geometry: &FloppyGeometry) -> Result<(), DiscatError>;
}
