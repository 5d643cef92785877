// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry aggregating every format plugin category.
//!
//! The `PluginRegistry` owns ten independent [`Catalog`]s, one per
//! [`PluginCategory`]. [`PluginRegistry::register`] merges the candidates of a
//! [`PluginSource`] into them: each candidate is constructed once to read its
//! name, and the first candidate to claim a canonical name in a category
//! keeps it.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use discat_config::{DiagnosticsMode, RegistryConfig};
use discat_core::{
    Archive, ByteAddressableImage, EntryKind, Filesystem, Filter, FloppyImage, MediaImage,
    PartitionScheme, Plugin, PluginCategory, ReadOnlyFilesystem, WritableFloppyImage,
    WritableImage,
};
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogEntry, canonical_name};
use crate::diagnostics::{DiagnosticSink, NoopSink, SkipEvent, SkipReason, TracingSink};
use crate::plugin_type::PluginType;
use crate::source::PluginSource;

/// Registry of format plugins, one catalog per category.
///
/// Merging takes `&mut self`; once populated the registry can be shared
/// read-only across threads.
pub struct PluginRegistry {
    filesystems: Catalog<dyn Filesystem>,
    read_only_filesystems: Catalog<dyn ReadOnlyFilesystem>,
    partitions: Catalog<dyn PartitionScheme>,
    media_images: Catalog<dyn MediaImage>,
    writable_images: Catalog<dyn WritableImage>,
    filters: Catalog<dyn Filter>,
    floppy_images: Catalog<dyn FloppyImage>,
    writable_floppy_images: Catalog<dyn WritableFloppyImage>,
    archives: Catalog<dyn Archive>,
    byte_addressable_images: Catalog<dyn ByteAddressableImage>,
    sink: Arc<dyn DiagnosticSink>,
}

/// Counters for a single merge.
#[derive(Debug, Default)]
struct MergeStats {
    added: usize,
    skipped: usize,
}

impl PluginRegistry {
    /// Create a new empty registry that discards skip diagnostics.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopSink))
    }

    /// Create a new empty registry reporting skips to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            filesystems: Catalog::new(PluginCategory::Filesystem),
            read_only_filesystems: Catalog::new(PluginCategory::ReadOnlyFilesystem),
            partitions: Catalog::new(PluginCategory::Partition),
            media_images: Catalog::new(PluginCategory::MediaImage),
            writable_images: Catalog::new(PluginCategory::WritableImage),
            filters: Catalog::new(PluginCategory::Filter),
            floppy_images: Catalog::new(PluginCategory::FloppyImage),
            writable_floppy_images: Catalog::new(PluginCategory::WritableFloppyImage),
            archives: Catalog::new(PluginCategory::Archive),
            byte_addressable_images: Catalog::new(PluginCategory::ByteAddressableImage),
            sink,
        }
    }

    /// Create a new empty registry with the diagnostic sink selected by `config`.
    ///
    /// An unparseable `skip_log_level` falls back to `debug`; run
    /// `discat_config::validation` first to reject it instead.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let sink: Arc<dyn DiagnosticSink> = match config.diagnostics {
            DiagnosticsMode::Off => Arc::new(NoopSink),
            DiagnosticsMode::Log => Arc::new(
                TracingSink::from_level_name(&config.skip_log_level).unwrap_or_default(),
            ),
        };
        Self::with_sink(sink)
    }

    /// Merge every candidate offered by `source` into the catalogs.
    ///
    /// Purely additive: existing entries are never replaced. Candidates that
    /// fail to construct, report an empty name, or collide with a name
    /// already in their catalog are skipped and reported to the sink only.
    pub fn register(&mut self, source: &dyn PluginSource) {
        let sink = self.sink.as_ref();
        let mut stats = MergeStats::default();

        merge_category(&mut self.filesystems, source.filesystems(), sink, &mut stats);
        merge_category(
            &mut self.read_only_filesystems,
            source.read_only_filesystems(),
            sink,
            &mut stats,
        );
        merge_category(&mut self.partitions, source.partitions(), sink, &mut stats);
        merge_category(&mut self.media_images, source.media_images(), sink, &mut stats);
        merge_category(
            &mut self.writable_images,
            source.writable_images(),
            sink,
            &mut stats,
        );
        merge_category(&mut self.filters, source.filters(), sink, &mut stats);
        merge_category(&mut self.floppy_images, source.floppy_images(), sink, &mut stats);
        merge_category(
            &mut self.writable_floppy_images,
            source.writable_floppy_images(),
            sink,
            &mut stats,
        );
        merge_category(&mut self.archives, source.archives(), sink, &mut stats);
        merge_category(
            &mut self.byte_addressable_images,
            source.byte_addressable_images(),
            sink,
            &mut stats,
        );

        info!(
            added = stats.added,
            skipped = stats.skipped,
            total = self.len(),
            "merged plugin source"
        );
    }

    pub fn filesystems(&self) -> &Catalog<dyn Filesystem> {
        &self.filesystems
    }

    pub fn read_only_filesystems(&self) -> &Catalog<dyn ReadOnlyFilesystem> {
        &self.read_only_filesystems
    }

    pub fn partitions(&self) -> &Catalog<dyn PartitionScheme> {
        &self.partitions
    }

    pub fn media_images(&self) -> &Catalog<dyn MediaImage> {
        &self.media_images
    }

    pub fn writable_images(&self) -> &Catalog<dyn WritableImage> {
        &self.writable_images
    }

    pub fn filters(&self) -> &Catalog<dyn Filter> {
        &self.filters
    }

    pub fn floppy_images(&self) -> &Catalog<dyn FloppyImage> {
        &self.floppy_images
    }

    pub fn writable_floppy_images(&self) -> &Catalog<dyn WritableFloppyImage> {
        &self.writable_floppy_images
    }

    pub fn archives(&self) -> &Catalog<dyn Archive> {
        &self.archives
    }

    pub fn byte_addressable_images(&self) -> &Catalog<dyn ByteAddressableImage> {
        &self.byte_addressable_images
    }

    /// Number of entries in the catalog of `category`.
    pub fn count(&self, category: PluginCategory) -> usize {
        match category {
            PluginCategory::Filesystem => self.filesystems.len(),
            PluginCategory::ReadOnlyFilesystem => self.read_only_filesystems.len(),
            PluginCategory::Partition => self.partitions.len(),
            PluginCategory::MediaImage => self.media_images.len(),
            PluginCategory::WritableImage => self.writable_images.len(),
            PluginCategory::Filter => self.filters.len(),
            PluginCategory::FloppyImage => self.floppy_images.len(),
            PluginCategory::WritableFloppyImage => self.writable_floppy_images.len(),
            PluginCategory::Archive => self.archives.len(),
            PluginCategory::ByteAddressableImage => self.byte_addressable_images.len(),
        }
    }

    /// Returns true if the catalog of `category` holds canonical `name`.
    pub fn contains(&self, category: PluginCategory, name: &str) -> bool {
        match category {
            PluginCategory::Filesystem => self.filesystems.contains(name),
            PluginCategory::ReadOnlyFilesystem => self.read_only_filesystems.contains(name),
            PluginCategory::Partition => self.partitions.contains(name),
            PluginCategory::MediaImage => self.media_images.contains(name),
            PluginCategory::WritableImage => self.writable_images.contains(name),
            PluginCategory::Filter => self.filters.contains(name),
            PluginCategory::FloppyImage => self.floppy_images.contains(name),
            PluginCategory::WritableFloppyImage => self.writable_floppy_images.contains(name),
            PluginCategory::Archive => self.archives.contains(name),
            PluginCategory::ByteAddressableImage => self.byte_addressable_images.contains(name),
        }
    }

    /// Total number of entries across all catalogs.
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

    /// Returns true if no catalog holds any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("filesystems", &self.filesystems)
            .field("read_only_filesystems", &self.read_only_filesystems)
            .field("partitions", &self.partitions)
            .field("media_images", &self.media_images)
            .field("writable_images", &self.writable_images)
            .field("filters", &self.filters)
            .field("floppy_images", &self.floppy_images)
            .field("writable_floppy_images", &self.writable_floppy_images)
            .field("archives", &self.archives)
            .field("byte_addressable_images", &self.byte_addressable_images)
            .finish_non_exhaustive()
    }
}

/// Merge one category's candidates into its catalog.
fn merge_category<P>(
    catalog: &mut Catalog<P>,
    candidates: Option<Vec<PluginType<P>>>,
    sink: &dyn DiagnosticSink,
    stats: &mut MergeStats,
) where
    P: Plugin + ?Sized,
{
    let category = catalog.category();

    for candidate in candidates.into_iter().flatten() {
        let type_name = candidate.type_name().to_string();
        let mut skip = |reason: SkipReason| {
            stats.skipped += 1;
            sink.skipped(&SkipEvent {
                category,
                type_name: type_name.clone(),
                reason,
            });
        };

        // The identity getters are plugin code too and run under the same guard.
        let constructed = panic::catch_unwind(AssertUnwindSafe(|| {
            candidate.instantiate().map(|plugin| {
                let info = plugin.info();
                (plugin, info)
            })
        }));
        let (plugin, info) = match constructed {
            Ok(Ok(constructed)) => constructed,
            Ok(Err(err)) => {
                skip(SkipReason::ConstructionFailed {
                    message: err.to_string(),
                });
                continue;
            }
            Err(payload) => {
                skip(SkipReason::ConstructionPanicked {
                    message: panic_message(payload.as_ref()),
                });
                continue;
            }
        };

        let Some(name) = canonical_name(&info.name) else {
            skip(SkipReason::EmptyName);
            continue;
        };

        let entry = match catalog.entry_kind() {
            EntryKind::Instance => CatalogEntry::Instance {
                info,
                plugin: Arc::from(plugin),
            },
            EntryKind::Type => CatalogEntry::Type {
                info,
                plugin_type: candidate,
            },
        };

        if !catalog.insert(name.clone(), entry) {
            skip(SkipReason::Duplicate { name });
            continue;
        }

        debug!(%category, %name, type_name = %type_name, "registered plugin");
        stats.added += 1;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discat_core::{ArchiveEntry, DiscatError, IntoCapability, ReadSeek};
    use uuid::Uuid;

    use crate::source::StaticSource;

    struct NamedArchive(&'static str);

    impl Plugin for NamedArchive {
        fn name(&self) -> &str {
            self.0
        }

        fn id(&self) -> Uuid {
            Uuid::nil()
        }

        fn author(&self) -> &str {
            "Discat Contributors"
        }
    }

    impl Archive for NamedArchive {
        fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
            false
        }

        fn entries(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<ArchiveEntry>, DiscatError> {
            Ok(vec![])
        }
    }

    fn archive(type_name: &'static str, name: &'static str) -> PluginType<dyn Archive> {
        PluginType::<dyn Archive>::new(type_name, move || {
            Ok(Box::new(NamedArchive(name)).into_capability())
        })
    }

    /// A source that leaves every category absent.
    struct AbsentSource;

    impl PluginSource for AbsentSource {}

    #[test]
    fn new_registry_is_empty() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.filesystems().category(), PluginCategory::Filesystem);
        assert_eq!(
            registry.byte_addressable_images().category(),
            PluginCategory::ByteAddressableImage
        );
    }

    #[test]
    fn absent_categories_are_treated_as_empty() {
        let mut registry = PluginRegistry::default();
        registry.register(&AbsentSource);
        registry.register(&StaticSource::new());
        assert!(registry.is_empty());
    }

    #[test]
    fn archives_are_stored_as_instances() {
        let mut registry = PluginRegistry::new();
        registry.register(&StaticSource::new().with_archive(archive("Zip", "ZIP")));

        let entry = registry.archives().get("zip").unwrap();
        assert_eq!(entry.kind(), EntryKind::Instance);
        assert_eq!(entry.info().name, "ZIP");
        assert_eq!(registry.count(PluginCategory::Archive), 1);
        assert!(registry.contains(PluginCategory::Archive, "zip"));
        assert!(!registry.contains(PluginCategory::Filter, "zip"));
    }

    #[test]
    fn first_archive_wins_within_one_merge() {
        let mut registry = PluginRegistry::new();
        let source = StaticSource::new()
            .with_archive(archive("First", "Stuffit"))
            .with_archive(archive("Second", "STUFFIT"));
        registry.register(&source);

        assert_eq!(registry.archives().len(), 1);
        assert_eq!(registry.archives().get("stuffit").unwrap().info().name, "Stuffit");
    }

    #[test]
    fn panicking_constructor_is_skipped() {
        let exploding = PluginType::<dyn Archive>::new("Exploding", || panic!("corrupt tables"));
        let source = StaticSource::new()
            .with_archive(exploding)
            .with_archive(archive("Zip", "ZIP"));

        let mut registry = PluginRegistry::new();
        registry.register(&source);

        let names: Vec<&str> = registry.archives().names().collect();
        assert_eq!(names, vec!["zip"]);
    }

    #[test]
    fn panic_message_extracts_strings() {
        let payload = panic::catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload = panic::catch_unwind(|| panic!("formatted {}", 42)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 42");
    }

    #[test]
    fn from_config_builds_registry() {
        let off = RegistryConfig {
            diagnostics: DiagnosticsMode::Off,
            ..RegistryConfig::default()
        };
        assert!(PluginRegistry::from_config(&off).is_empty());

        let log = RegistryConfig {
            diagnostics: DiagnosticsMode::Log,
            skip_log_level: "warn".to_string(),
        };
        assert!(PluginRegistry::from_config(&log).is_empty());
    }

    #[test]
    fn panicking_name_getter_is_skipped() {
        struct BrokenName;

        impl Plugin for BrokenName {
            fn name(&self) -> &str {
                panic!("name table unreadable")
            }

            fn id(&self) -> Uuid {
                Uuid::nil()
            }

            fn author(&self) -> &str {
                "Discat Contributors"
            }
        }

        impl Archive for BrokenName {
            fn identify(&self, _stream: &mut dyn ReadSeek) -> bool {
                false
            }

            fn entries(
                &self,
                _stream: &mut dyn ReadSeek,
            ) -> Result<Vec<ArchiveEntry>, DiscatError> {
                Ok(vec![])
            }
        }

        let broken = PluginType::<dyn Archive>::new("BrokenName", || {
            Ok(Box::new(BrokenName).into_capability())
        });
        let source = StaticSource::new()
            .with_archive(broken)
            .with_archive(archive("Zip", "ZIP"));

        let mut registry = PluginRegistry::new();
        registry.register(&source);

        let names: Vec<&str> = registry.archives().names().collect();
        assert_eq!(names, vec!["zip"]);
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PluginRegistry>();
    }
}
