// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte-addressable image trait (ROM dumps, flash images, ...).

use crate::error::DiscatError;
use crate::traits::filter::ReadSeek;
use crate::traits::plugin::Plugin;

/// Reader for images addressed by byte offset rather than by sector.
pub trait ByteAddressableImage: Plugin {
    /// Returns true if the stream holds an image of this format.
    fn identify(&self, stream: &mut dyn ReadSeek) -> bool;

    /// Reads up to `buf.len()` bytes starting at `offset`, returning the count read.
    fn read_bytes(
        &self,
        stream: &mut dyn ReadSeek,
        offset: u64,
        buf: &mut [u8],
    ) -> Result<usize, DiscatError>;
}
