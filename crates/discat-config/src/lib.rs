// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Discat plugin registry.
//!
//! Settings are layered from TOML files and `DISCAT_*` environment variables,
//! deserialized strictly, and validated. Problems come back as miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use discat_config::{load_and_validate, render_errors};
//!
//! match load_and_validate() {
//!     Ok(config) => println!("diagnostics: {:?}", config.registry.diagnostics),
//!     Err(errors) => render_errors(&errors),
//! }
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{DiagnosticsMode, DiscatConfig, RegistryConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<DiscatConfig, Vec<ConfigError>> {
    let result = loader::load_config();
    finish(result, collect_toml_sources)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<DiscatConfig, Vec<ConfigError>> {
    let result = loader::load_config_from_str(toml_content);
    finish(result, || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load configuration from one file (plus environment) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<DiscatConfig, Vec<ConfigError>> {
    let result = loader::load_config_from_path(path);
    finish(result, || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

fn finish(
    result: Result<DiscatConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<DiscatConfig, Vec<ConfigError>> {
    match result {
        Ok(config) => {
            validation::validate_config(&config)?;
            debug!(
                diagnostics = ?config.registry.diagnostics,
                skip_log_level = %config.registry.skip_log_level,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read whichever config files exist, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| PathBuf::from(loader::LOCAL_CONFIG_FILE));

    [
        Some(local),
        loader::user_config_path(),
        Some(PathBuf::from(loader::SYSTEM_CONFIG_PATH)),
    ]
    .into_iter()
    .flatten()
    .filter_map(|path| {
        std::fs::read_to_string(&path)
            .ok()
            .map(|content| (path.display().to_string(), content))
    })
    .collect()
}
