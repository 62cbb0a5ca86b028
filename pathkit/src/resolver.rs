//! Search-path resolution.
//!
//! This module provides the [`Resolver`] type, which locates a file by
//! probing an ordered list of base directories.

use std::fmt;

use crate::error::Result;
use crate::fs::{Cwd, Stat};
use crate::path::{Convention, GenericPath};

/// An ordered preference list of base directories.
///
/// [`resolve`](Resolver::resolve) probes each directory in order and returns
/// the first candidate that exists. A miss is not an error: the name is
/// returned unresolved, and callers detect the miss by checking existence of
/// the result.
///
/// # Examples
///
/// ```
/// use pathkit::{MemoryFilesystem, Posix, PosixPath, Resolver};
///
/// let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/"))
///     .with_directory("/usr/include")
///     .with_file("/usr/local/include/config.h");
///
/// let resolver = Resolver::new(vec![
///     PosixPath::new("/usr/include"),
///     PosixPath::new("/usr/local/include"),
/// ]);
///
/// assert_eq!(resolver.resolve("config.h", &fs), "/usr/local/include/config.h");
/// assert_eq!(resolver.resolve("missing.h", &fs), "missing.h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver<C: Convention> {
    search_paths: Vec<GenericPath<C>>,
}

impl<C: Convention> Default for Resolver<C> {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
        }
    }
}

impl<C: Convention> Resolver<C> {
    /// Create a resolver over `search_paths`, in priority order.
    ///
    /// Duplicates are kept.
    #[must_use]
    pub fn new(search_paths: Vec<GenericPath<C>>) -> Self {
        Self { search_paths }
    }

    /// Create a resolver whose only entry is the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn from_cwd(cwd: &impl Cwd<C>) -> Result<Self> {
        Ok(Self::new(vec![cwd.getcwd()?]))
    }

    /// Add a directory with the lowest priority.
    pub fn append(&mut self, path: GenericPath<C>) {
        self.search_paths.push(path);
    }

    /// Add a directory with the highest priority.
    pub fn prepend(&mut self, path: GenericPath<C>) {
        self.search_paths.insert(0, path);
    }

    /// Insert a directory at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, path: GenericPath<C>) {
        self.search_paths.insert(index, path);
    }

    /// Remove and return the directory at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> GenericPath<C> {
        self.search_paths.remove(index)
    }

    /// Remove every directory.
    pub fn clear(&mut self) {
        self.search_paths.clear();
    }

    /// Number of directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.search_paths.len()
    }

    /// Returns `true` if there are no directories to search.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_paths.is_empty()
    }

    /// The directories in priority order.
    #[must_use]
    pub fn search_paths(&self) -> &[GenericPath<C>] {
        &self.search_paths
    }

    /// Iterate over the directories in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, GenericPath<C>> {
        self.search_paths.iter()
    }

    /// Locate `name` in the search directories.
    ///
    /// Returns `dir / name` for the first directory where that candidate
    /// exists according to `stat`. Otherwise, or if `name` is absolute,
    /// returns `name` parsed but otherwise unchanged.
    pub fn resolve(&self, name: &str, stat: &impl Stat) -> GenericPath<C> {
        let name = GenericPath::<C>::new(name);
        if name.is_absolute() {
            log::debug!("{name} is absolute, not searching");
            return name;
        }

        for dir in &self.search_paths {
            let candidate = dir.join(&name);
            let status = candidate.status_in(stat);
            log::trace!("probe {candidate}: {status:?}");
            if status.is_present() {
                log::debug!("resolved {name} to {candidate}");
                return candidate;
            }
        }

        log::debug!(
            "{name} not found in {} search path(s)",
            self.search_paths.len()
        );
        name
    }
}

impl<'a, C: Convention> IntoIterator for &'a Resolver<C> {
    type Item = &'a GenericPath<C>;
    type IntoIter = std::slice::Iter<'a, GenericPath<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Convention> IntoIterator for Resolver<C> {
    type Item = GenericPath<C>;
    type IntoIter = std::vec::IntoIter<GenericPath<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.search_paths.into_iter()
    }
}

impl<C: Convention> FromIterator<GenericPath<C>> for Resolver<C> {
    fn from_iter<I: IntoIterator<Item = GenericPath<C>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<C: Convention> Extend<GenericPath<C>> for Resolver<C> {
    fn extend<I: IntoIterator<Item = GenericPath<C>>>(&mut self, iter: I) {
        self.search_paths.extend(iter);
    }
}

impl<C: Convention> fmt::Display for Resolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "resolver[")?;
        for (index, path) in self.search_paths.iter().enumerate() {
            write!(f, "  {path:?}")?;
            if index + 1 < self.search_paths.len() {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
