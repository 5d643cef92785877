// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for Discat format plugins.
//!
//! A [`PluginSource`] offers constructible [`PluginType`] handles per
//! category. [`PluginRegistry::register`] merges them into ten catalogs keyed
//! by canonical (lower-case) plugin name, first registration wins. Filters,
//! floppy images, archives and byte-addressable images are stored as shared
//! instances; filesystem, partition and media image plugins are stored as
//! type handles and instantiated per use.

pub mod catalog;
pub mod diagnostics;
pub mod listing;
pub mod plugin_type;
pub mod registry;
pub mod source;

pub use catalog::{Catalog, CatalogEntry, canonical_name};
pub use diagnostics::{DiagnosticSink, NoopSink, SkipEvent, SkipReason, TracingSink};
pub use listing::PluginDescriptor;
pub use plugin_type::{Constructor, PluginType};
pub use registry::PluginRegistry;
pub use source::{PluginSource, StaticSource};
