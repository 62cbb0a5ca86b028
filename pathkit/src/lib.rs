#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Portable path values with lexical resolution and search-path lookup.
//!
//! A [`GenericPath`] is an immutable list of components plus an optional
//! root, spelled according to a compile-time [`Convention`]. Paths compose
//! with `/`, decompose into directory, stem and extension, and normalize
//! lexically without touching the filesystem. A [`Resolver`] locates a name
//! in an ordered list of base directories.
//!
//! ## Core Types
//!
//! - [`GenericPath`], [`PosixPath`], [`WindowsPath`] and [`NativePath`]: path values
//! - [`Resolver`]: ordered search-path lookup
//! - [`Stat`] and [`Cwd`]: filesystem capabilities, with [`OsFilesystem`]
//!   for the host and [`MemoryFilesystem`] for tests
//! - [`Error`] and [`Result`]: Error handling types
//! - [`LogLevel`] and [`init_logger`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::PosixPath;
//!
//! let header = PosixPath::new("/usr/include") / "sys/../stdio.h";
//! assert_eq!(header.resolve(), "/usr/include/stdio.h");
//! assert_eq!(header.stem(), "stdio");
//! assert_eq!(header.extension(), ".h");
//!
//! let base = PosixPath::new("/usr/lib");
//! assert_eq!(header.relative(&base).unwrap(), "../include/stdio.h");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, EnvironmentConfig, ResolverConfig};
pub use error::{Error, Result};
pub use fs::{temp_dir, Cwd, MemoryFilesystem, OsFilesystem, PathStatus, Stat};
pub use logging::{init_logger, LogLevel, StderrLogger};
pub use path::{
    Convention, GenericPath, Native, NativePath, Posix, PosixPath, Root, Windows, WindowsPath,
};
pub use resolver::Resolver;
