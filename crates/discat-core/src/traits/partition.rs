// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partition scheme trait.

use crate::traits::image::MediaImage;
use crate::traits::plugin::Plugin;
use crate::types::Partition;

/// Partition table reader (MBR, GPT, Apple partition map, ...).
pub trait PartitionScheme: Plugin {
    /// Reads the partition table starting at `sector_offset`.
    ///
    /// Returns `None` when the image carries no table of this scheme.
    fn partitions(&mut self, image: &mut dyn MediaImage, sector_offset: u64)
    -> Option<Vec<Partition>>;
}
