// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin source contract and a static, compiled-in source.

use discat_core::{
    Archive, ByteAddressableImage, Filesystem, Filter, FloppyImage, MediaImage, PartitionScheme,
    ReadOnlyFilesystem, WritableFloppyImage, WritableImage,
};

use crate::plugin_type::PluginType;

/// Supplies candidate plugin type handles, one sequence per category.
///
/// `None` means the source has nothing to say about a category and is
/// treated exactly like an empty sequence. Every accessor defaults to `None`,
/// so a source only implements the categories it provides.
pub trait PluginSource {
    fn filesystems(&self) -> Option<Vec<PluginType<dyn Filesystem>>> {
        None
    }

    fn read_only_filesystems(&self) -> Option<Vec<PluginType<dyn ReadOnlyFilesystem>>> {
        None
    }

    fn partitions(&self) -> Option<Vec<PluginType<dyn PartitionScheme>>> {
        None
    }

    fn media_images(&self) -> Option<Vec<PluginType<dyn MediaImage>>> {
        None
    }

    fn writable_images(&self) -> Option<Vec<PluginType<dyn WritableImage>>> {
        None
    }

    fn filters(&self) -> Option<Vec<PluginType<dyn Filter>>> {
        None
    }

    fn floppy_images(&self) -> Option<Vec<PluginType<dyn FloppyImage>>> {
        None
    }

    fn writable_floppy_images(&self) -> Option<Vec<PluginType<dyn WritableFloppyImage>>> {
        None
    }

    fn archives(&self) -> Option<Vec<PluginType<dyn Archive>>> {
        None
    }

    fn byte_addressable_images(&self) -> Option<Vec<PluginType<dyn ByteAddressableImage>>> {
        None
    }
}

/// A plugin source assembled in code from known plugin types.
///
/// Handles are offered in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    filesystems: Vec<PluginType<dyn Filesystem>>,
    read_only_filesystems: Vec<PluginType<dyn ReadOnlyFilesystem>>,
    partitions: Vec<PluginType<dyn PartitionScheme>>,
    media_images: Vec<PluginType<dyn MediaImage>>,
    writable_images: Vec<PluginType<dyn WritableImage>>,
    filters: Vec<PluginType<dyn Filter>>,
    floppy_images: Vec<PluginType<dyn FloppyImage>>,
    writable_floppy_images: Vec<PluginType<dyn WritableFloppyImage>>,
    archives: Vec<PluginType<dyn Archive>>,
    byte_addressable_images: Vec<PluginType<dyn ByteAddressableImage>>,
}

impl StaticSource {
    /// Create a source offering nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filesystem(mut self, plugin: PluginType<dyn Filesystem>) -> Self {
        self.filesystems.push(plugin);
        self
    }

    pub fn with_read_only_filesystem(mut self, plugin: PluginType<dyn ReadOnlyFilesystem>) -> Self {
        self.read_only_filesystems.push(plugin);
        self
    }

    pub fn with_partition(mut self, plugin: PluginType<dyn PartitionScheme>) -> Self {
        self.partitions.push(plugin);
        self
    }

    pub fn with_media_image(mut self, plugin: PluginType<dyn MediaImage>) -> Self {
        self.media_images.push(plugin);
        self
    }

    pub fn with_writable_image(mut self, plugin: PluginType<dyn WritableImage>) -> Self {
        self.writable_images.push(plugin);
        self
    }

    pub fn with_filter(mut self, plugin: PluginType<dyn Filter>) -> Self {
        self.filters.push(plugin);
        self
    }

    pub fn with_floppy_image(mut self, plugin: PluginType<dyn FloppyImage>) -> Self {
        self.floppy_images.push(plugin);
        self
    }

    pub fn with_writable_floppy_image(
        mut self,
        plugin: PluginType<dyn WritableFloppyImage>,
    ) -> Self {
        self.writable_floppy_images.push(plugin);
        self
    }

    pub fn with_archive(mut self, plugin: PluginType<dyn Archive>) -> Self {
        self.archives.push(plugin);
        self
    }

    pub fn with_byte_addressable_image(
        mut self,
        plugin: PluginType<dyn ByteAddressableImage>,
    ) -> Self {
        self.byte_addressable_images.push(plugin);
        self
    }

    /// Total number of handles across all categories.
    pub fn len(&self) -> usize {
        self.filesystems.len()
            + self.read_only_filesystems.len()
            + self.partitions.len()
            + self.media_images.len()
            + self.writable_images.len()
            + self.filters.len()
            + self.floppy_images.len()
            + self.writable_floppy_images.len()
            + self.archives.len()
            + self.byte_addressable_images.len()
    }

    /// Returns true if the source offers no handles at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PluginSource for StaticSource {
    fn filesystems(&self) -> Option<Vec<PluginType<dyn Filesystem>>> {
        Some(self.filesystems.clone())
    }

    fn read_only_filesystems(&self) -> Option<Vec<PluginType<dyn ReadOnlyFilesystem>>> {
        Some(self.read_only_filesystems.clone())
    }

    fn partitions(&self) -> Option<Vec<PluginType<dyn PartitionScheme>>> {
        Some(self.partitions.clone())
    }

    fn media_images(&self) -> Option<Vec<PluginType<dyn MediaImage>>> {
        Some(self.media_images.clone())
    }

    fn writable_images(&self) -> Option<Vec<PluginType<dyn WritableImage>>> {
        Some(self.writable_images.clone())
    }

    fn filters(&self) -> Option<Vec<PluginType<dyn Filter>>> {
        Some(self.filters.clone())
    }

    fn floppy_images(&self) -> Option<Vec<PluginType<dyn FloppyImage>>> {
        Some(self.floppy_images.clone())
    }

    fn writable_floppy_images(&self) -> Option<Vec<PluginType<dyn WritableFloppyImage>>> {
        Some(self.writable_floppy_images.clone())
    }

    fn archives(&self) -> Option<Vec<PluginType<dyn Archive>>> {
        Some(self.archives.clone())
    }

    fn byte_addressable_images(&self) -> Option<Vec<PluginType<dyn ByteAddressableImage>>> {
        Some(self.byte_addressable_images.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discat_core::{ArchiveEntry, DiscatError, Plugin, ReadSeek};
    use uuid::Uuid;

    #[derive(Default)]
    struct Lha;

    impl Plugin for Lha {
        fn name(&self) -> &str {
            "LHA"
        }

        fn id(&self) -> Uuid {
            Uuid::nil()
        }

        fn author(&self) -> &str {
            "Discat Contributors"
        }
    }

    impl Archive for Lha {
        fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
            false
        }

        fn entries(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<ArchiveEntry>, DiscatError> {
            Ok(vec![])
        }
    }

    struct NothingOffered;

    impl PluginSource for NothingOffered {}

    #[test]
    fn empty_static_source() {
        let source = StaticSource::new();
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
        assert_eq!(source.archives().map(|a| a.len()), Some(0));
    }

    #[test]
    fn builder_counts_handles_across_categories() {
        let source = StaticSource::new()
            .with_archive(PluginType::<dyn Archive>::of::<Lha>())
            .with_archive(PluginType::<dyn Archive>::of::<Lha>());
        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());

        let offered = source.archives().unwrap();
        assert_eq!(offered.len(), 2);
        assert_eq!(offered[0].instantiate().unwrap().name(), "LHA");
        assert!(source.filters().unwrap().is_empty());
    }

    #[test]
    fn default_accessors_are_absent() {
        let source = NothingOffered;
        assert!(source.filesystems().is_none());
        assert!(source.archives().is_none());
        assert!(source.byte_addressable_images().is_none());
    }
}
