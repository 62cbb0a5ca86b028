//! Separator and root-marker conventions.
//!
//! A [`Convention`] is a zero-sized marker type that tells
//! [`GenericPath`](super::GenericPath) how to recognize separators and
//! root markers. The convention is fixed at compile time: [`Native`] selects
//! [`Windows`] on Windows targets and [`Posix`] everywhere else, while the two
//! concrete markers stay available on every host so either grammar can be
//! used (and tested) anywhere.

use std::fmt;
use std::hash::Hash;

/// The root marker of an absolute path.
///
/// Relative paths have no root. The marker is never counted as a component.
///
/// # Examples
///
/// ```
/// use pathkit::{Root, PosixPath, WindowsPath};
///
/// assert_eq!(PosixPath::new("/usr").root(), Some(&Root::Separator));
/// assert_eq!(
///     WindowsPath::new("c:\\Users").root(),
///     Some(&Root::Volume("c:".to_string()))
/// );
/// assert_eq!(PosixPath::new("usr").root(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Root {
    /// A bare leading separator (`/` on POSIX, `\` on Windows).
    Separator,
    /// A drive or volume token such as `c:`, always followed by a separator
    /// in canonical form.
    Volume(String),
}

impl Root {
    /// Appends the canonical form of this root to `out`.
    pub(crate) fn render<C: Convention>(&self, out: &mut String) {
        if let Self::Volume(volume) = self {
            out.push_str(volume);
        }
        out.push(C::SEPARATOR);
    }
}

/// Describes how paths are spelled on one platform family.
///
/// Implementations are zero-sized markers used as the type parameter of
/// [`GenericPath`](super::GenericPath).
pub trait Convention:
    Clone + Copy + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Human-readable name of the convention.
    const NAME: &'static str;

    /// The separator emitted when formatting a path.
    const SEPARATOR: char;

    /// The separator between entries of a search-path list (as in `PATH`).
    const LIST_SEPARATOR: char;

    /// Returns `true` if `c` separates components when parsing.
    fn is_separator(c: char) -> bool;

    /// Splits a root marker off the front of `s`.
    ///
    /// Returns the detected root (if any) and the remainder of the string.
    fn split_root(s: &str) -> (Option<Root>, &str);
}

/// POSIX convention: `/` separator, `/` root, backslash is an ordinary
/// character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Posix;

impl Convention for Posix {
    const NAME: &'static str = "posix";
    const SEPARATOR: char = '/';
    const LIST_SEPARATOR: char = ':';

    fn is_separator(c: char) -> bool {
        c == '/'
    }

    fn split_root(s: &str) -> (Option<Root>, &str) {
        match s.strip_prefix('/') {
            Some(rest) => (Some(Root::Separator), rest),
            None => (None, s),
        }
    }
}

/// Windows convention: `\` separator (`/` is accepted when parsing) and an
/// optional `X:` drive token.
///
/// A drive-relative spelling such as `c:foo` is read as `c:\foo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Windows;

impl Convention for Windows {
    const NAME: &'static str = "windows";
    const SEPARATOR: char = '\\';
    const LIST_SEPARATOR: char = ';';

    fn is_separator(c: char) -> bool {
        c == '\\' || c == '/'
    }

    fn split_root(s: &str) -> (Option<Root>, &str) {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return (Some(Root::Volume(s[..2].to_string())), &s[2..]);
        }
        match s.chars().next() {
            Some(c) if Self::is_separator(c) => (Some(Root::Separator), &s[c.len_utf8()..]),
            _ => (None, s),
        }
    }
}

/// The convention of the build target.
#[cfg(windows)]
pub type Native = Windows;

/// The convention of the build target.
#[cfg(not(windows))]
pub type Native = Posix;
