//! Configuration file loading.

use std::fs;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::ResolverConfig;
use crate::error::{Error, Result};
use crate::fs::{OsFilesystem, PathStatus};
use crate::path::NativePath;

/// Loads [`ResolverConfig`] from YAML.
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("search_paths: [/usr/include]").unwrap();
/// assert_eq!(config.search_paths, ["/usr/include"]);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a configuration document.
    ///
    /// An empty document gives the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or contains
    /// unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<ResolverConfig> {
        if contents.trim().is_empty() {
            return Ok(ResolverConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if nothing exists at `path`,
    /// [`Error::Io`] if it cannot be queried or read, or [`Error::Configuration`] if
    /// the YAML is invalid.
    pub fn load_file(path: &NativePath) -> Result<ResolverConfig> {
        // query errors fall through so the read reports the real cause
        if path.status_in(&OsFilesystem) == PathStatus::Absent {
            return Err(Error::InvalidPath {
                path: path.as_str().into(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let contents = fs::read_to_string(path)?;
        log::debug!("loaded configuration from {path}");
        Self::from_yaml_str(&contents)
    }

    /// Load a configuration file, apply PATHKIT_* overrides and validate
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, an override, or validation fails.
    pub fn load(path: &NativePath) -> Result<ResolverConfig> {
        let mut config = Self::load_file(path)?;
        EnvironmentConfig::apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}
