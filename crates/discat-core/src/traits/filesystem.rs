// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem capability traits.

use crate::error::DiscatError;
use crate::traits::image::MediaImage;
use crate::traits::plugin::Plugin;
use crate::types::Partition;

/// Filesystem plugin able to detect and describe a filesystem on a partition.
pub trait Filesystem: Plugin {
    /// Returns true if the partition holds a filesystem of this format.
    fn identify(&mut self, image: &mut dyn MediaImage, partition: &Partition) -> bool;

    /// Produces a human-readable description of the filesystem.
    fn information(
        &mut self,
        image: &mut dyn MediaImage,
        partition: &Partition,
    ) -> Result<String, DiscatError>;
}

/// Filesystem plugin that can mount a partition and list its contents.
///
/// Mounting keeps session state in the plugin, so every use needs a fresh
/// instance.
pub trait ReadOnlyFilesystem: Plugin {
    /// Returns true if the partition holds a filesystem of this format.
    fn identify(&mut self, image: &mut dyn MediaImage, partition: &Partition) -> bool;

    /// Mounts the filesystem found on `partition`.
    fn mount(&mut self, image: &mut dyn MediaImage, partition: &Partition)
    -> Result<(), DiscatError>;

    /// Releases the mounted filesystem.
    fn unmount(&mut self) -> Result<(), DiscatError>;

    /// Lists the entries of a directory in the mounted filesystem.
    fn read_dir(&self, path: &str) -> Result<Vec<String>, DiscatError>;
}
