// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by capability traits and the plugin registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// The ten plugin categories tracked by the registry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PluginCategory {
    Filesystem,
    ReadOnlyFilesystem,
    Partition,
    MediaImage,
    WritableImage,
    Filter,
    FloppyImage,
    WritableFloppyImage,
    Archive,
    ByteAddressableImage,
}

impl PluginCategory {
    /// How catalog entries of this category are stored.
    ///
    /// Filesystem and image plugins hold per-use session state, so the
    /// registry keeps only their type handle. The rest are shared instances.
    pub fn entry_kind(self) -> EntryKind {
        match self {
            PluginCategory::Filesystem
            | PluginCategory::ReadOnlyFilesystem
            | PluginCategory::Partition
            | PluginCategory::MediaImage
            | PluginCategory::WritableImage => EntryKind::Type,
            PluginCategory::Filter
            | PluginCategory::FloppyImage
            | PluginCategory::WritableFloppyImage
            | PluginCategory::Archive
            | PluginCategory::ByteAddressableImage => EntryKind::Instance,
        }
    }
}

/// Storage form of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A constructed plugin shared by every caller.
    Instance,
    /// A type handle the caller instantiates per use.
    Type,
}

/// Identity metadata reported by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Display name as reported by the plugin.
    pub name: String,
    /// Stable plugin identifier.
    pub id: Uuid,
    /// Plugin author.
    pub author: String,
}

/// A partition located by a partition scheme plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Position of the partition in the scheme's table.
    pub sequence: u64,
    /// First sector of the partition.
    pub start: u64,
    /// Length in sectors.
    pub length: u64,
    /// Partition type as named by the scheme.
    pub kind: String,
    /// Name of the scheme that found it.
    pub scheme: String,
}

/// Geometry and size information for an opened media image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub sectors: u64,
    pub sector_size: u32,
    pub media_type: String,
}

/// Physical layout of a floppy image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloppyGeometry {
    pub cylinders: u16,
    pub heads: u8,
    pub sectors_per_track: u8,
    pub sector_size: u16,
}

/// A single member of an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub path: String,
    pub size: u64,
    pub is_directory: bool,
}
