// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Discat format plugin registry.
//!
//! This crate provides the capability traits every format plugin implements,
//! the shared error type, and the common types exchanged between plugins
//! (partitions, image information, floppy geometry, archive members).

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DiscatError;
pub use types::{
    ArchiveEntry, EntryKind, FloppyGeometry, ImageInfo, Partition, PluginCategory, PluginInfo,
};

// Re-export all capability traits at crate root.
pub use traits::{
    Archive, ByteAddressableImage, DataStream, Filesystem, Filter, FloppyImage, IntoCapability,
    MediaImage, PartitionScheme, Plugin, ReadOnlyFilesystem, ReadSeek, WritableFloppyImage,
    WritableImage,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use uuid::Uuid;

    #[test]
    fn discat_error_has_all_variants() {
        let _io = DiscatError::from(std::io::Error::other("test"));
        let _unsupported = DiscatError::Unsupported("write".into());
        let _invalid = DiscatError::InvalidData {
            message: "bad magic".into(),
        };
        let _construction = DiscatError::Construction {
            type_name: "Iso9660".into(),
            message: "missing table".into(),
        };
        let _internal = DiscatError::Internal("test".into());

        let not_found = DiscatError::PluginNotFound {
            category: PluginCategory::Filesystem,
            name: "udf".into(),
        };
        assert_eq!(not_found.to_string(), "plugin not found: filesystem/udf");
    }

    #[test]
    fn plugin_category_has_ten_variants() {
        let variants: Vec<PluginCategory> = PluginCategory::iter().collect();
        assert_eq!(variants.len(), 10, "PluginCategory must have exactly 10 variants");

        for variant in &variants {
            let s = variant.to_string();
            let parsed = PluginCategory::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn plugin_category_display_is_snake_case() {
        assert_eq!(PluginCategory::ReadOnlyFilesystem.to_string(), "read_only_filesystem");
        assert_eq!(
            PluginCategory::ByteAddressableImage.to_string(),
            "byte_addressable_image"
        );
    }

    #[test]
    fn entry_kind_splits_categories_in_half() {
        let types = PluginCategory::iter()
            .filter(|c| c.entry_kind() == EntryKind::Type)
            .count();
        assert_eq!(types, 5);

        assert_eq!(PluginCategory::Filesystem.entry_kind(), EntryKind::Type);
        assert_eq!(PluginCategory::WritableImage.entry_kind(), EntryKind::Type);
        assert_eq!(PluginCategory::Filter.entry_kind(), EntryKind::Instance);
        assert_eq!(PluginCategory::Archive.entry_kind(), EntryKind::Instance);
        assert_eq!(
            PluginCategory::ByteAddressableImage.entry_kind(),
            EntryKind::Instance
        );
    }

    #[test]
    fn plugin_category_serialization() {
        let json = serde_json::to_string(&PluginCategory::FloppyImage).expect("should serialize");
        assert_eq!(json, "\"floppy_image\"");
        let parsed: PluginCategory = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed, PluginCategory::FloppyImage);
    }

    struct Passthrough;

    impl Plugin for Passthrough {
        fn name(&self) -> &str {
            "No filter"
        }

        fn id(&self) -> Uuid {
            Uuid::nil()
        }

        fn author(&self) -> &str {
            "Discat Contributors"
        }
    }

    impl Filter for Passthrough {
        fn identify(&self, path: &Path) -> bool {
            path.exists()
        }

        fn open(&self, path: &Path) -> Result<DataStream, DiscatError> {
            Ok(Box::new(std::fs::File::open(path)?))
        }
    }

    #[test]
    fn into_capability_unsizes_concrete_plugin() {
        let filter: Box<dyn Filter> = Box::new(Passthrough).into_capability();
        assert_eq!(filter.name(), "No filter");
    }

    #[test]
    fn plugin_info_collects_identity() {
        let info = Passthrough.info();
        assert_eq!(info.name, "No filter");
        assert_eq!(info.id, Uuid::nil());
        assert_eq!(info.author, "Discat Contributors");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compiles only if every capability trait is reachable from the crate root.
        fn _assert_plugin<T: Plugin>() {}
        fn _assert_filesystem<T: Filesystem>() {}
        fn _assert_read_only_filesystem<T: ReadOnlyFilesystem>() {}
        fn _assert_partition<T: PartitionScheme>() {}
        fn _assert_media_image<T: MediaImage>() {}
        fn _assert_writable_image<T: WritableImage>() {}
        fn _assert_filter<T: Filter>() {}
        fn _assert_floppy<T: FloppyImage>() {}
        fn _assert_writable_floppy<T: WritableFloppyImage>() {}
        fn _assert_archive<T: Archive>() {}
        fn _assert_byte_addressable<T: ByteAddressableImage>() {}
    }
}
