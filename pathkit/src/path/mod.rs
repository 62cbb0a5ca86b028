//! Portable path values and their resolution algebra.
//!
//! This module provides the [`GenericPath`] value type together with the
//! operations that compose, decompose and normalize it.
//!
//! # Key Concepts
//!
//! ## Conventions
//!
//! A path is spelled according to a [`Convention`] chosen at compile time:
//! [`Posix`] (`/`) or [`Windows`] (`\`, with an optional `X:` drive). The
//! [`NativePath`] alias uses the convention of the build target; the
//! [`PosixPath`] and [`WindowsPath`] aliases are available on every host.
//!
//! ## Parsing
//!
//! Parsing never fails. The root marker is split off, runs of separators
//! collapse, and `.`/`..` are kept as literal components:
//!
//! ```
//! use pathkit::PosixPath;
//!
//! let p = PosixPath::new("dir//./sub/");
//! assert_eq!(p.components(), ["dir", ".", "sub"]);
//! assert_eq!(p, "dir/./sub");
//! ```
//!
//! ## Lexical Resolution
//!
//! [`GenericPath::resolve`] collapses `.` and `..` using only the component
//! list. Absolute paths clamp at the root; relative paths keep leading `..`:
//!
//! ```
//! use pathkit::PosixPath;
//!
//! assert_eq!(PosixPath::new("dir//./sub/").resolve(), "dir/sub");
//! assert_eq!(PosixPath::new("/../etc").resolve(), "/etc");
//! assert_eq!(PosixPath::new("../etc").resolve(), "../etc");
//! ```
//!
//! ## Equality
//!
//! Equality, hashing and ordering use the canonical string. Redundant
//! separators are removed at parse time, so `dir//sub/` and `dir/sub` are
//! equal immediately, while `dir/./sub` only equals them after `resolve`.

pub mod algebra;
pub mod convention;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use convention::{Convention, Native, Posix, Root, Windows};
pub use types::{GenericPath, NativePath, PosixPath, WindowsPath};
