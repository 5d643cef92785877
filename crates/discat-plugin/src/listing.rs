// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat, serializable listing of every registered plugin.
//!
//! Backs format listings ("which formats does this build support?") and
//! name search without exposing the plugin objects themselves.

use discat_core::{EntryKind, PluginCategory};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::registry::PluginRegistry;

/// Description of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    pub category: PluginCategory,
    /// Canonical (lower-case) catalog key.
    pub key: String,
    /// Display name as reported by the plugin.
    pub name: String,
    pub id: Uuid,
    pub author: String,
    pub kind: EntryKind,
}

impl PluginRegistry {
    /// Describe every entry, ordered by category, then by canonical name.
    pub fn describe(&self) -> Vec<PluginDescriptor> {
        let mut out = Vec::with_capacity(self.len());
        describe_catalog(self.filesystems(), &mut out);
        describe_catalog(self.read_only_filesystems(), &mut out);
        describe_catalog(self.partitions(), &mut out);
        describe_catalog(self.media_images(), &mut out);
        describe_catalog(self.writable_images(), &mut out);
        describe_catalog(self.filters(), &mut out);
        describe_catalog(self.floppy_images(), &mut out);
        describe_catalog(self.writable_floppy_images(), &mut out);
        describe_catalog(self.archives(), &mut out);
        describe_catalog(self.byte_addressable_images(), &mut out);
        out
    }

    /// Search registered plugins by query string.
    ///
    /// Keeps entries whose canonical name or author contains the query
    /// (case-insensitive). An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<PluginDescriptor> {
        if query.is_empty() {
            return self.describe();
        }
        let query_lower = query.to_lowercase();
        self.describe()
            .into_iter()
            .filter(|d| {
                d.key.contains(&query_lower) || d.author.to_lowercase().contains(&query_lower)
            })
            .collect()
    }
}

fn describe_catalog<P: ?Sized + 'static>(catalog: &Catalog<P>, out: &mut Vec<PluginDescriptor>) {
    out.extend(catalog.iter().map(|(key, entry)| {
        let info = entry.info();
        PluginDescriptor {
            category: catalog.category(),
            key: key.to_string(),
            name: info.name.clone(),
            id: info.id,
            author: info.author.clone(),
            kind: entry.kind(),
        }
    }));
}
