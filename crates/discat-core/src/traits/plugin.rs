// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that every format plugin implements.

use uuid::Uuid;

use crate::types::PluginInfo;

/// The base trait for all Discat plugins.
///
/// The registry only relies on this identity surface: a plugin is keyed by the
/// lower-cased form of [`Plugin::name`], and a plugin reporting an empty name
/// is never registered.
pub trait Plugin: Send + Sync + 'static {
    /// Returns the human-readable display name of this plugin.
    fn name(&self) -> &str;

    /// Returns the stable identifier of this plugin.
    fn id(&self) -> Uuid;

    /// Returns the plugin author.
    fn author(&self) -> &str;

    /// Collects the identity fields into a [`PluginInfo`].
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name().to_string(),
            id: self.id(),
            author: self.author().to_string(),
        }
    }
}
