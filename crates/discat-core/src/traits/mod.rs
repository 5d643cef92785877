// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions for the Discat plugin architecture.
//!
//! Every plugin implements the [`Plugin`] base trait plus the trait of the
//! category it registers under.

pub mod archive;
pub mod byte_addressable;
pub mod capability;
pub mod filesystem;
pub mod filter;
pub mod floppy;
pub mod image;
pub mod partition;
pub mod plugin;

// Re-export all traits at the traits module level for convenience.
pub use archive::Archive;
pub use byte_addressable::ByteAddressableImage;
pub use capability::IntoCapability;
pub use filesystem::{Filesystem, ReadOnlyFilesystem};
pub use filter::{DataStream, Filter, ReadSeek};
pub use floppy::{FloppyImage, WritableFloppyImage};
pub use image::{MediaImage, WritableImage};
pub use partition::PartitionScheme;
pub use plugin::Plugin;
