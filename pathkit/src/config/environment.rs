//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHKIT_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::ResolverConfig;
use crate::error::{Error, Result};
use crate::path::{Convention, Native};

/// Directories searched before any configured entry, separated by the
/// platform list separator (`:` on Unix, `;` on Windows).
pub const SEARCH_PATH_ENV: &str = "PATHKIT_SEARCH_PATH";

/// Boolean override for [`ResolverConfig::include_cwd`].
pub const INCLUDE_CWD_ENV: &str = "PATHKIT_INCLUDE_CWD";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{EnvironmentConfig, ResolverConfig};
///
/// let mut config = ResolverConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Entries from `PATHKIT_SEARCH_PATH` are placed ahead of the configured
    /// ones, keeping their order. Empty list items are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHKIT_INCLUDE_CWD` is not a recognized boolean.
    pub fn apply_overrides(config: &mut ResolverConfig) -> Result<()> {
        if let Ok(value) = env::var(SEARCH_PATH_ENV) {
            let entries = Self::split_search_path(&value);
            log::debug!("{SEARCH_PATH_ENV} adds {} search path(s)", entries.len());
            config.search_paths.splice(0..0, entries);
        }

        if let Ok(value) = env::var(INCLUDE_CWD_ENV) {
            config.include_cwd = Self::parse_bool(INCLUDE_CWD_ENV, &value)?;
        }

        Ok(())
    }

    fn split_search_path(s: &str) -> Vec<String> {
        s.split(Native::LIST_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect()
    }

    /// Parse a boolean value from an environment variable.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive)
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
