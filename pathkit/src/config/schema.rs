//! Configuration schema for resolver search paths.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fs::Cwd;
use crate::path::normalize::expand_tilde;
use crate::path::{Native, NativePath};
use crate::resolver::Resolver;

/// Search-path configuration, as read from YAML.
///
/// Entries are kept as strings until [`build`](ResolverConfig::build) so
/// that `~` expansion and validation see exactly what the user wrote.
///
/// # Examples
///
/// ```
/// use pathkit::config::ResolverConfig;
///
/// let config: ResolverConfig = serde_yaml::from_str(
///     "search_paths:\n  - /usr/include\n  - ~/include\ninclude_cwd: true\n",
/// ).unwrap();
/// assert_eq!(config.search_paths.len(), 2);
/// assert!(config.include_cwd);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Directories to search, highest priority first.
    #[serde(default)]
    pub search_paths: Vec<String>,

    /// Search the working directory before every configured entry.
    #[serde(default)]
    pub include_cwd: bool,
}

impl ResolverConfig {
    /// Check that every entry names a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for empty or whitespace-only entries.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.search_paths.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(Error::Validation {
                    field: "search_paths".into(),
                    message: format!("entry {index} is empty"),
                });
            }
        }
        Ok(())
    }

    /// Build a native resolver from this configuration.
    ///
    /// Each entry has `~` expanded and is made absolute against `cwd`. With
    /// `include_cwd`, the working directory becomes the first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, an entry uses unsupported
    /// `~user` syntax, or the working directory cannot be determined.
    pub fn build(&self, cwd: &impl Cwd<Native>) -> Result<Resolver<Native>> {
        self.validate()?;

        let mut resolver = Resolver::default();
        if self.include_cwd {
            resolver.append(cwd.getcwd()?);
        }
        for entry in &self.search_paths {
            let path = expand_tilde(&NativePath::new(entry))?;
            resolver.append(path.make_absolute(cwd)?);
        }
        log::debug!("built resolver with {} search path(s)", resolver.len());
        Ok(resolver)
    }
}
