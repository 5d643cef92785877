// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Discat configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscatConfig {
    /// Plugin registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// What happens to skipped plugin candidates during a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// Skips are dropped.
    #[default]
    Off,
    /// Skips are logged through `tracing` at `skip_log_level`.
    Log,
}

/// Plugin registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Whether skipped candidates are reported.
    #[serde(default)]
    pub diagnostics: DiagnosticsMode,

    /// Level used when logging skips (trace, debug, info, warn, error).
    #[serde(default = "default_skip_log_level")]
    pub skip_log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticsMode::default(),
            skip_log_level: default_skip_log_level(),
        }
    }
}

fn default_skip_log_level() -> String {
    "debug".to_string()
}
