// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observers for candidates skipped while merging a plugin source.
//!
//! Skipping is never an error for the caller of
//! [`PluginRegistry::register`](crate::PluginRegistry::register). The reason
//! for every skip is still handed to the registry's [`DiagnosticSink`], which
//! discards it by default.

use std::fmt;
use std::str::FromStr;

use discat_core::PluginCategory;
use tracing::{Level, debug, error, info, trace, warn};

/// Why a candidate plugin was left out of its catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The constructor returned an error.
    ConstructionFailed { message: String },
    /// The constructor panicked.
    ConstructionPanicked { message: String },
    /// The plugin reported an empty display name.
    EmptyName,
    /// An earlier candidate already holds this canonical name.
    Duplicate { name: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ConstructionFailed { message } => {
                write!(f, "construction failed: {message}")
            }
            SkipReason::ConstructionPanicked { message } => {
                write!(f, "constructor panicked: {message}")
            }
            SkipReason::EmptyName => write!(f, "empty plugin name"),
            SkipReason::Duplicate { name } => write!(f, "name `{name}` already registered"),
        }
    }
}

/// A skip decision made during a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipEvent {
    pub category: PluginCategory,
    /// Type name of the skipped handle.
    pub type_name: String,
    pub reason: SkipReason,
}

/// Receives skip decisions from the registry.
pub trait DiagnosticSink: Send + Sync {
    fn skipped(&self, event: &SkipEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn skipped(&self, _event: &SkipEvent) {}
}

/// Sink that forwards skip events to `tracing` at a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Build a sink from a level name such as `"debug"` or `"WARN"`.
    pub fn from_level_name(name: &str) -> Option<Self> {
        Level::from_str(name).ok().map(Self::new)
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl DiagnosticSink for TracingSink {
    fn skipped(&self, event: &SkipEvent) {
        let category = event.category;
        let type_name = event.type_name.as_str();
        let reason = &event.reason;

        if self.level == Level::ERROR {
            error!(%category, type_name, %reason, "skipped plugin candidate");
        } else if self.level == Level::WARN {
            warn!(%category, type_name, %reason, "skipped plugin candidate");
        } else if self.level == Level::INFO {
            info!(%category, type_name, %reason, "skipped plugin candidate");
        } else if self.level == Level::DEBUG {
            debug!(%category, type_name, %reason, "skipped plugin candidate");
        } else {
            trace!(%category, type_name, %reason, "skipped plugin candidate");
        }
    }
}
