// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Discat plugins and the plugin registry.

use thiserror::Error;

use crate::types::PluginCategory;

/// The primary error type returned by plugin constructors and capability operations.
#[derive(Debug, Error)]
pub enum DiscatError {
    /// Underlying I/O failure while reading or writing an image or stream.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The plugin does not implement the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// The data handed to a plugin is malformed or not in the plugin's format.
    #[error("invalid data: {message}")]
    InvalidData { message: String },

    /// No plugin is registered under the given canonical name.
    #[error("plugin not found: {category}/{name}")]
    PluginNotFound {
        category: PluginCategory,
        name: String,
    },

    /// A plugin type could not be constructed.
    #[error("failed to construct plugin {type_name}: {message}")]
    Construction { type_name: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
