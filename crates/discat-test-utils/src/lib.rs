// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Discat integration tests.
//!
//! # Components
//!
//! - [`MockPlugin`] - a plugin implementing every capability, with a configurable name
//! - [`mock_type`], [`failing_type`], [`panicking_type`] - ready-made [`PluginType`] handles
//! - [`RecordingSink`] - a diagnostic sink that keeps every skip event for assertion
//!
//! [`PluginType`]: discat_plugin::PluginType

pub mod mock_plugin;
pub mod mock_types;
pub mod recording_sink;

pub use mock_plugin::MockPlugin;
pub use mock_types::{counting_type, empty_name_type, failing_type, mock_type, panicking_type};
pub use recording_sink::RecordingSink;
