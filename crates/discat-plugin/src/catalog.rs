// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-category catalogs keyed by canonical plugin name.
//!
//! A [`Catalog`] is an ordered map from canonical name to [`CatalogEntry`].
//! Entries are either shared plugin instances or type handles, depending on
//! the catalog's category.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use discat_core::{DiscatError, EntryKind, PluginCategory, PluginInfo};

use crate::plugin_type::PluginType;

/// Compute the catalog key for a plugin display name.
///
/// Returns `None` for an empty name, which is never registered. Any other
/// name, whitespace included, is kept as is apart from case.
pub fn canonical_name(display_name: &str) -> Option<String> {
    if display_name.is_empty() {
        return None;
    }
    Some(display_name.to_lowercase())
}

/// A single catalog entry.
pub enum CatalogEntry<P: ?Sized> {
    /// A constructed plugin shared by all callers.
    Instance { info: PluginInfo, plugin: Arc<P> },
    /// A type handle the caller instantiates per use.
    Type {
        info: PluginInfo,
        plugin_type: PluginType<P>,
    },
}

impl<P: ?Sized + 'static> CatalogEntry<P> {
    /// Identity captured from the plugin when it was registered.
    pub fn info(&self) -> &PluginInfo {
        match self {
            CatalogEntry::Instance { info, .. } | CatalogEntry::Type { info, .. } => info,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Instance { .. } => EntryKind::Instance,
            CatalogEntry::Type { .. } => EntryKind::Type,
        }
    }

    /// The shared plugin, for instance entries.
    pub fn instance(&self) -> Option<&Arc<P>> {
        match self {
            CatalogEntry::Instance { plugin, .. } => Some(plugin),
            CatalogEntry::Type { .. } => None,
        }
    }

    /// The type handle, for type entries.
    pub fn plugin_type(&self) -> Option<&PluginType<P>> {
        match self {
            CatalogEntry::Instance { .. } => None,
            CatalogEntry::Type { plugin_type, .. } => Some(plugin_type),
        }
    }

    /// Build a fresh plugin from a type entry.
    ///
    /// Returns `None` for instance entries.
    pub fn instantiate(&self) -> Option<Result<Box<P>, DiscatError>> {
        self.plugin_type().map(PluginType::instantiate)
    }
}

impl<P: ?Sized> Clone for CatalogEntry<P> {
    fn clone(&self) -> Self {
        match self {
            CatalogEntry::Instance { info, plugin } => CatalogEntry::Instance {
                info: info.clone(),
                plugin: Arc::clone(plugin),
            },
            CatalogEntry::Type { info, plugin_type } => CatalogEntry::Type {
                info: info.clone(),
                plugin_type: plugin_type.clone(),
            },
        }
    }
}

impl<P: ?Sized> fmt::Debug for CatalogEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEntry::Instance { info, .. } => f
                .debug_struct("Instance")
                .field("info", info)
                .finish_non_exhaustive(),
            CatalogEntry::Type { info, plugin_type } => f
                .debug_struct("Type")
                .field("info", info)
                .field("type_name", &plugin_type.type_name())
                .finish(),
        }
    }
}

/// Ordered mapping from canonical name to entry for one plugin category.
pub struct Catalog<P: ?Sized> {
    category: PluginCategory,
    entries: BTreeMap<String, CatalogEntry<P>>,
}

impl<P: ?Sized + 'static> Catalog<P> {
    /// Create an empty catalog for `category`.
    pub fn new(category: PluginCategory) -> Self {
        Self {
            category,
            entries: BTreeMap::new(),
        }
    }

    pub fn category(&self) -> PluginCategory {
        self.category
    }

    /// How entries of this catalog are stored.
    pub fn entry_kind(&self) -> EntryKind {
        self.category.entry_kind()
    }

    /// Look up an entry by canonical (lower-case) name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry<P>> {
        self.entries.get(name)
    }

    /// Like [`Catalog::get`], reporting a missing name as
    /// [`DiscatError::PluginNotFound`].
    pub fn try_get(&self, name: &str) -> Result<&CatalogEntry<P>, DiscatError> {
        self.get(name).ok_or_else(|| DiscatError::PluginNotFound {
            category: self.category,
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The shared plugin registered under `name`, if it is an instance entry.
    pub fn instance(&self, name: &str) -> Option<Arc<P>> {
        self.get(name).and_then(CatalogEntry::instance).cloned()
    }

    /// A fresh plugin built from the type entry registered under `name`.
    pub fn instantiate(&self, name: &str) -> Option<Result<Box<P>, DiscatError>> {
        self.get(name).and_then(CatalogEntry::instantiate)
    }

    /// All entries in canonical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry<P>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// All canonical names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert under `name` unless the name is already taken.
    ///
    /// Returns false, leaving the existing entry untouched, on a collision.
    pub(crate) fn insert(&mut self, name: String, entry: CatalogEntry<P>) -> bool {
        match self.entries.entry(name) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }
}

impl<P: ?Sized> fmt::Debug for Catalog<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("category", &self.category)
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
