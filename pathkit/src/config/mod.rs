//! Configuration system for search-path resolvers.
//!
//! A resolver can be described in YAML and built against a working
//! directory:
//!
//! ```yaml
//! search_paths:
//!   - include
//!   - ~/.local/include
//!   - /usr/include
//! include_cwd: true
//! ```
//!
//! # Precedence
//!
//! 1. `PATHKIT_SEARCH_PATH` entries, searched first
//! 2. `PATHKIT_INCLUDE_CWD`, replacing the file's `include_cwd`
//! 3. The configuration file
//! 4. Built-in defaults (no search paths, cwd not included)
//!
//! # Examples
//!
//! ```
//! use pathkit::config::ConfigLoader;
//! use pathkit::{MemoryFilesystem, NativePath};
//!
//! let config = ConfigLoader::from_yaml_str("search_paths: [include]").unwrap();
//! let cwd = MemoryFilesystem::new(pathkit::temp_dir());
//! let resolver = config.build(&cwd).unwrap();
//! assert_eq!(
//!     resolver.search_paths(),
//!     [pathkit::temp_dir().join(&NativePath::new("include"))]
//! );
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::ResolverConfig;
