//! Filesystem boundary.
//!
//! Path algebra never touches the filesystem on its own. Existence checks
//! and working-directory access go through two small capabilities:
//!
//! - [`Stat`] answers "what is at this path?" with a [`PathStatus`]
//! - [`Cwd`] reads and changes the working directory
//!
//! [`OsFilesystem`] implements both against the real operating system, and
//! [`MemoryFilesystem`] is an in-memory stand-in for deterministic tests.
//!
//! # Examples
//!
//! ```
//! use pathkit::{MemoryFilesystem, Posix, PosixPath};
//!
//! let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/project"))
//!     .with_file("/project/src/main.rs");
//!
//! assert!(PosixPath::new("src/main.rs").is_file_in(&fs));
//! assert!(PosixPath::new("/project/src").is_directory_in(&fs));
//! assert!(!PosixPath::new("src/lib.rs").exists_in(&fs));
//! ```

mod memory;

pub use memory::MemoryFilesystem;

use std::env;
use std::fs;
use std::io;

use crate::error::{Error, Result};
use crate::path::{Convention, GenericPath, Native, NativePath};

/// What a [`Stat`] query found at a path.
///
/// Anything other than [`File`](PathStatus::File) or
/// [`Directory`](PathStatus::Directory) counts as absent for the boolean
/// helpers, including query errors such as a denied permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStatus {
    /// The path names a file (any entry that is not a directory).
    File,
    /// The path names a directory.
    Directory,
    /// Nothing exists at the path.
    Absent,
    /// The query itself failed.
    Error(io::ErrorKind),
}

impl PathStatus {
    /// Returns `true` for files and directories.
    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::File | Self::Directory)
    }

    /// Returns `true` for files.
    #[must_use]
    pub fn is_file(self) -> bool {
        self == Self::File
    }

    /// Returns `true` for directories.
    #[must_use]
    pub fn is_directory(self) -> bool {
        self == Self::Directory
    }
}

/// Capability for querying what exists at a path.
#[cfg_attr(test, mockall::automock)]
pub trait Stat {
    /// Look up the entry named by `path`.
    fn stat(&self, path: &str) -> PathStatus;
}

/// Capability for reading and changing the working directory.
///
/// Changing the directory is a side effect shared by everything using the
/// same capability (for [`OsFilesystem`], the whole process). Callers that
/// share one across threads must serialize `chdir` themselves.
pub trait Cwd<C: Convention = Native> {
    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    fn getcwd(&self) -> Result<GenericPath<C>>;

    /// Change the working directory to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChangeDirectory`] if `path` is missing or not an
    /// accessible directory; the working directory is then unchanged.
    fn chdir(&self, path: &GenericPath<C>) -> Result<()>;
}

impl<C: Convention> GenericPath<C> {
    /// Query `stat` for this path.
    pub fn status_in(&self, stat: &impl Stat) -> PathStatus {
        stat.stat(self.as_str())
    }

    /// Returns `true` if `stat` reports a file or directory at this path.
    pub fn exists_in(&self, stat: &impl Stat) -> bool {
        self.status_in(stat).is_present()
    }

    /// Returns `true` if `stat` reports a file at this path.
    pub fn is_file_in(&self, stat: &impl Stat) -> bool {
        self.status_in(stat).is_file()
    }

    /// Returns `true` if `stat` reports a directory at this path.
    pub fn is_directory_in(&self, stat: &impl Stat) -> bool {
        self.status_in(stat).is_directory()
    }
}

impl NativePath {
    /// Returns `true` if something exists at this path on the real
    /// filesystem. Query errors count as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::NativePath;
    ///
    /// assert!(!NativePath::new("nonexistant").exists());
    /// ```
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists_in(&OsFilesystem)
    }

    /// Returns `true` if this path names a file on the real filesystem.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.is_file_in(&OsFilesystem)
    }

    /// Returns `true` if this path names a directory on the real filesystem.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory_in(&OsFilesystem)
    }

    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    pub fn current_dir() -> Result<Self> {
        OsFilesystem.getcwd()
    }

    /// Make this path the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChangeDirectory`] if the directory cannot be entered.
    pub fn set_current_dir(&self) -> Result<()> {
        OsFilesystem.chdir(self)
    }
}

/// The real operating system.
///
/// # Examples
///
/// ```no_run
/// use pathkit::{Cwd, NativePath, OsFilesystem};
///
/// let cwd = OsFilesystem.getcwd().unwrap();
/// let abs = NativePath::new("src/lib.rs").make_absolute(&OsFilesystem).unwrap();
/// assert!(abs.as_str().starts_with(cwd.as_str()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Stat for OsFilesystem {
    fn stat(&self, path: &str) -> PathStatus {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => PathStatus::Directory,
            Ok(_) => PathStatus::File,
            Err(e) if e.kind() == io::ErrorKind::NotFound => PathStatus::Absent,
            Err(e) => {
                log::debug!("stat {path:?} failed: {e}");
                PathStatus::Error(e.kind())
            }
        }
    }
}

impl Cwd<Native> for OsFilesystem {
    fn getcwd(&self) -> Result<NativePath> {
        let cwd = env::current_dir().map_err(Error::CurrentDirectory)?;
        NativePath::from_std_path(&cwd)
    }

    fn chdir(&self, path: &NativePath) -> Result<()> {
        env::set_current_dir(path.as_str()).map_err(|source| Error::ChangeDirectory {
            path: path.to_string(),
            source,
        })?;
        log::debug!("changed working directory to {path}");
        Ok(())
    }
}

/// The directory the operating system provides for temporary files.
///
/// The directory is not checked for existence. Non-UTF-8 characters are
/// replaced lossily.
///
/// # Examples
///
/// ```
/// let tmp = pathkit::temp_dir();
/// assert!(tmp.is_absolute());
/// ```
#[must_use]
pub fn temp_dir() -> NativePath {
    NativePath::new(env::temp_dir().to_string_lossy())
}
