// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `/etc/discat/discat.toml`, `~/.config/discat/discat.toml`,
//! `./discat.toml`, then `DISCAT_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DiscatConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/discat/discat.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "discat.toml";

/// Path of the per-user configuration file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("discat").join(LOCAL_CONFIG_FILE))
}

/// Build the full layered Figment (defaults, files, environment).
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(DiscatConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(LOCAL_CONFIG_FILE)).merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<DiscatConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults only.
pub fn load_config_from_str(toml_content: &str) -> Result<DiscatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DiscatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DiscatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DiscatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider for `DISCAT_*` variables.
///
/// Only the section prefix is turned into a dot, so
/// `DISCAT_REGISTRY_SKIP_LOG_LEVEL` maps to `registry.skip_log_level`.
pub fn env_provider() -> Env {
    Env::prefixed("DISCAT_").map(|key| key.as_str().replacen("registry_", "registry.", 1).into())
}
