//! In-memory filesystem for deterministic tests.

use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::fs::{Cwd, PathStatus, Stat};
use crate::path::{Convention, GenericPath};

/// A table of entries plus a working directory, implementing [`Stat`] and
/// [`Cwd`] without touching the real filesystem.
///
/// Relative queries are resolved against the fake working directory, the
/// same way the operating system would. Registering an entry registers all
/// of its ancestors as directories.
///
/// # Examples
///
/// ```
/// use pathkit::{Cwd, MemoryFilesystem, Posix, PosixPath};
///
/// let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/home/me"))
///     .with_directory("/srv/data");
///
/// fs.chdir(&PosixPath::new("/srv/data")).unwrap();
/// assert_eq!(fs.getcwd().unwrap(), "/srv/data");
/// assert!(fs.chdir(&PosixPath::new("/nowhere")).is_err());
/// assert_eq!(fs.getcwd().unwrap(), "/srv/data");
/// ```
#[derive(Debug)]
pub struct MemoryFilesystem<C: Convention> {
    entries: HashMap<GenericPath<C>, PathStatus>,
    cwd: Mutex<GenericPath<C>>,
}

impl<C: Convention> MemoryFilesystem<C> {
    /// Create a filesystem whose working directory is `cwd`.
    ///
    /// `cwd` is normalized and registered as a directory.
    ///
    /// # Panics
    ///
    /// Panics if `cwd` is relative.
    #[must_use]
    pub fn new(cwd: GenericPath<C>) -> Self {
        assert!(cwd.is_absolute(), "working directory {cwd} must be absolute");
        let cwd = cwd.resolve();
        let mut fs = Self {
            entries: HashMap::new(),
            cwd: Mutex::new(cwd.clone()),
        };
        fs.insert_ancestors(&cwd);
        fs.entries.insert(cwd, PathStatus::Directory);
        fs
    }

    /// Register a file (and its ancestor directories).
    #[must_use]
    pub fn with_file(self, path: &str) -> Self {
        self.with_status(path, PathStatus::File)
    }

    /// Register a directory (and its ancestor directories).
    #[must_use]
    pub fn with_directory(self, path: &str) -> Self {
        self.with_status(path, PathStatus::Directory)
    }

    /// Make queries for `path` fail with `kind`.
    #[must_use]
    pub fn with_error(self, path: &str, kind: io::ErrorKind) -> Self {
        self.with_status(path, PathStatus::Error(kind))
    }

    fn with_status(mut self, path: &str, status: PathStatus) -> Self {
        let path = self.absolute(&GenericPath::new(path));
        self.insert_ancestors(&path);
        self.entries.insert(path, status);
        self
    }

    fn insert_ancestors(&mut self, path: &GenericPath<C>) {
        let mut parent = path.dirname();
        while parent.len() > 0 {
            self.entries
                .entry(parent.clone())
                .or_insert(PathStatus::Directory);
            parent = parent.dirname();
        }
        self.entries.entry(parent).or_insert(PathStatus::Directory);
    }

    fn current(&self) -> GenericPath<C> {
        self.cwd
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn absolute(&self, path: &GenericPath<C>) -> GenericPath<C> {
        path.resolve_against(&self.current())
    }
}

impl<C: Convention> Stat for MemoryFilesystem<C> {
    fn stat(&self, path: &str) -> PathStatus {
        let path = GenericPath::<C>::new(path);
        if path.is_empty() {
            return PathStatus::Absent;
        }
        let path = self.absolute(&path);
        self.entries
            .get(&path)
            .copied()
            .unwrap_or(PathStatus::Absent)
    }
}

impl<C: Convention> Cwd<C> for MemoryFilesystem<C> {
    fn getcwd(&self) -> Result<GenericPath<C>> {
        Ok(self.current())
    }

    fn chdir(&self, path: &GenericPath<C>) -> Result<()> {
        let source = match self.stat(path.as_str()) {
            PathStatus::Directory => {
                let target = self.absolute(path);
                *self.cwd.lock().unwrap_or_else(PoisonError::into_inner) = target;
                return Ok(());
            }
            PathStatus::File => io::Error::other("not a directory"),
            PathStatus::Absent => io::Error::from(io::ErrorKind::NotFound),
            PathStatus::Error(kind) => io::Error::from(kind),
        };
        Err(Error::ChangeDirectory {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Posix, PosixPath, Windows, WindowsPath};

    #[test]
    fn test_new_registers_cwd_and_ancestors() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/a/b/./c"));
        assert_eq!(fs.getcwd().unwrap(), "/a/b/c");
        assert_eq!(fs.stat("/a/b/c"), PathStatus::Directory);
        assert_eq!(fs.stat("/a/b"), PathStatus::Directory);
        assert_eq!(fs.stat("/"), PathStatus::Directory);
        assert_eq!(fs.stat("/a/x"), PathStatus::Absent);
    }

    #[test]
    #[should_panic(expected = "must be absolute")]
    fn test_new_rejects_relative_cwd() {
        let _ = MemoryFilesystem::<Posix>::new(PosixPath::new("relative"));
    }

    #[test]
    fn test_relative_queries_use_cwd() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/src"))
            .with_file("filesystem.hpp");
        assert_eq!(fs.stat("filesystem.hpp"), PathStatus::File);
        assert_eq!(fs.stat("/src/filesystem.hpp"), PathStatus::File);
        assert_eq!(fs.stat("../src/./filesystem.hpp"), PathStatus::File);
        assert_eq!(fs.stat(""), PathStatus::Absent);
    }

    #[test]
    fn test_error_entries() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/"))
            .with_error("/locked", io::ErrorKind::PermissionDenied);
        let locked = PosixPath::new("/locked");
        assert_eq!(
            locked.status_in(&fs),
            PathStatus::Error(io::ErrorKind::PermissionDenied)
        );
        assert!(!locked.exists_in(&fs));
    }

    #[test]
    fn test_chdir_relative() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/a")).with_directory("/a/b/c");
        fs.chdir(&PosixPath::new("b/c")).unwrap();
        assert_eq!(fs.getcwd().unwrap(), "/a/b/c");
        fs.chdir(&PosixPath::new("../..")).unwrap();
        assert_eq!(fs.getcwd().unwrap(), "/a");
    }

    #[test]
    fn test_chdir_failures_keep_cwd() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/a")).with_file("/a/f.txt");

        let err = fs.chdir(&PosixPath::new("f.txt")).unwrap_err();
        assert!(matches!(err, Error::ChangeDirectory { .. }));
        assert!(!err.is_not_found());

        let err = fs.chdir(&PosixPath::new("/missing")).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(fs.getcwd().unwrap(), "/a");
    }

    #[test]
    fn test_windows_volumes() {
        let fs = MemoryFilesystem::<Windows>::new(WindowsPath::new("c:\\work"))
            .with_file("d:\\data\\x.bin");
        assert_eq!(fs.stat("d:/data/x.bin"), PathStatus::File);
        assert_eq!(fs.stat("d:\\data"), PathStatus::Directory);
        assert_eq!(fs.stat("c:\\data"), PathStatus::Absent);
    }
}
