// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic sink that captures skip events for assertion in tests.

use std::sync::Mutex;

use discat_core::PluginCategory;
use discat_plugin::{DiagnosticSink, SkipEvent, SkipReason};

/// Keeps every skip event it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SkipEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    pub fn events(&self) -> Vec<SkipEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Reasons recorded for one category.
    pub fn reasons_for(&self, category: PluginCategory) -> Vec<SkipReason> {
        self.events()
            .into_iter()
            .filter(|e| e.category == category)
            .map(|e| e.reason)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn skipped(&self, event: &SkipEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
