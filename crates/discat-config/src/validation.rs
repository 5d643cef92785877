// SPDX-FileCopyrightText: 2026 Discat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::DiscatConfig;

/// Level names accepted for `registry.skip_log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &DiscatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.registry.skip_log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "registry.skip_log_level `{}` is not one of: {}",
                config.registry.skip_log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&DiscatConfig::default()).is_ok());
    }

    #[test]
    fn level_names_are_case_insensitive() {
        let mut config = DiscatConfig::default();
        config.registry.skip_log_level = "WARN".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_level_fails_validation() {
        let mut config = DiscatConfig::default();
        config.registry.skip_log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("skip_log_level"));
    }
}
