//! The path value type.
//!
//! [`GenericPath`] stores a parsed path as an optional [`Root`] plus an
//! ordered list of components, together with its canonical string. All
//! comparisons, hashing and ordering go through the canonical string, so two
//! paths are equal exactly when they format identically.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::convention::{Convention, Native, Posix, Root, Windows};

/// A path spelled according to the convention `C`.
///
/// Parsing never fails: a leading root marker is detected, the remainder is
/// split on runs of separators and empty segments are dropped. `.` and `..`
/// are kept verbatim until [`resolve`](GenericPath::resolve) is called.
///
/// Every operation returns a new value; a `GenericPath` is never mutated
/// after construction.
///
/// # Examples
///
/// ```
/// use pathkit::PosixPath;
///
/// let path = PosixPath::new("/dir 1//dir 2/");
/// assert_eq!(path.len(), 2);
/// assert_eq!(&path[0], "dir 1");
/// assert_eq!(path.as_str(), "/dir 1/dir 2");
/// assert!(path.is_absolute());
/// ```
#[derive(Clone)]
pub struct GenericPath<C: Convention> {
    root: Option<Root>,
    components: Vec<String>,
    repr: String,
    convention: PhantomData<C>,
}

/// A path using the POSIX convention.
pub type PosixPath = GenericPath<Posix>;

/// A path using the Windows convention.
pub type WindowsPath = GenericPath<Windows>;

/// A path using the convention of the build target.
pub type NativePath = GenericPath<Native>;

impl<C: Convention> GenericPath<C> {
    /// Parse a path from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{PosixPath, WindowsPath};
    ///
    /// assert_eq!(PosixPath::new("a//b/").as_str(), "a/b");
    /// assert_eq!(WindowsPath::new("c:/dir/file").as_str(), "c:\\dir\\file");
    /// assert_eq!(PosixPath::new("").len(), 0);
    /// ```
    pub fn new(s: impl AsRef<str>) -> Self {
        let (root, rest) = C::split_root(s.as_ref());
        let components = rest
            .split(C::is_separator)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Self::from_raw(root, components)
    }

    /// The empty relative path.
    ///
    /// Its canonical string is `""` and its length is 0.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_raw(None, Vec::new())
    }

    /// Build a path from a root and a sequence of components.
    ///
    /// Each piece is split on separators and empty pieces are dropped, so the
    /// result always satisfies the component invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{PosixPath, Root};
    ///
    /// let path = PosixPath::from_parts(Some(Root::Separator), ["usr", "", "local/bin"]);
    /// assert_eq!(path.as_str(), "/usr/local/bin");
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn from_parts<I, S>(root: Option<Root>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = components
            .into_iter()
            .flat_map(|piece| {
                piece
                    .as_ref()
                    .split(C::is_separator)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::from_raw(root, components)
    }

    /// Build a relative path from a sequence of components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let path = PosixPath::from_components(["a", "b", "c"]);
    /// assert_eq!(path, "a/b/c");
    /// ```
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_parts(None, components)
    }

    /// Assemble a path from separator-free components.
    ///
    /// A rootless path whose first component reads as a root marker (a
    /// Windows drive such as `c:`) takes that root, so the structure always
    /// matches what its canonical string parses back to.
    pub(crate) fn from_raw(mut root: Option<Root>, mut components: Vec<String>) -> Self {
        if root.is_none() {
            let leading = components.first().and_then(|first| match C::split_root(first) {
                (Some(detected), rest) => Some((detected, rest.to_owned())),
                (None, _) => None,
            });
            if let Some((detected, rest)) = leading {
                root = Some(detected);
                if rest.is_empty() {
                    components.remove(0);
                } else {
                    components[0] = rest;
                }
            }
        }

        let mut repr = String::new();
        if let Some(root) = &root {
            root.render::<C>(&mut repr);
        }
        for (index, component) in components.iter().enumerate() {
            if index > 0 {
                repr.push(C::SEPARATOR);
            }
            repr.push_str(component);
        }
        Self {
            root,
            components,
            repr,
            convention: PhantomData,
        }
    }

    /// The root marker, or `None` for a relative path.
    #[must_use]
    pub fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    /// Returns `true` if the path carries a root marker.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// Returns `true` if the path has no root marker.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.root.is_none()
    }

    /// Number of components. The root marker is not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the empty path: no root and no components.
    ///
    /// A bare root such as `/` has length 0 but is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.components.is_empty()
    }

    /// The components in left-to-right order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Iterate over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.components.iter()
    }

    /// The component at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(String::as_str)
    }

    /// The canonical string, using the convention's separator.
    ///
    /// This is the single explicit string accessor; no implicit conversion
    /// to `String` exists.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Consume the path and return its canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.repr
    }

    pub(crate) fn into_parts(self) -> (Option<Root>, Vec<String>) {
        (self.root, self.components)
    }
}

impl NativePath {
    /// Convert a standard library path into a native path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::NativePath;
    /// use std::path::Path;
    ///
    /// let path = NativePath::from_std_path(Path::new("some/dir")).unwrap();
    /// assert_eq!(path.len(), 2);
    /// ```
    pub fn from_std_path(path: &std::path::Path) -> Result<Self> {
        let s = path.to_str().ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path contains invalid UTF-8".to_string(),
        })?;
        Ok(Self::new(s))
    }
}

impl AsRef<std::path::Path> for NativePath {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.repr)
    }
}

impl<C: Convention> Default for GenericPath<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Convention> PartialEq for GenericPath<C> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<C: Convention> Eq for GenericPath<C> {}

impl<C: Convention> PartialEq<str> for GenericPath<C> {
    fn eq(&self, other: &str) -> bool {
        self.repr == other
    }
}

impl<C: Convention> PartialEq<&str> for GenericPath<C> {
    fn eq(&self, other: &&str) -> bool {
        self.repr == *other
    }
}

impl<C: Convention> Hash for GenericPath<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<C: Convention> PartialOrd for GenericPath<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Convention> Ord for GenericPath<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

// Hash, Eq and Ord all delegate to the canonical string, which keeps this
// consistent with `str` as the `Borrow` contract requires.
impl<C: Convention> Borrow<str> for GenericPath<C> {
    fn borrow(&self) -> &str {
        &self.repr
    }
}

impl<C: Convention> AsRef<str> for GenericPath<C> {
    fn as_ref(&self) -> &str {
        &self.repr
    }
}

impl<C: Convention> Index<usize> for GenericPath<C> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        assert!(
            index < self.components.len(),
            "component index {index} out of range for path of length {}",
            self.components.len()
        );
        &self.components[index]
    }
}

impl<C: Convention> fmt::Display for GenericPath<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl<C: Convention> fmt::Debug for GenericPath<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.repr, f)
    }
}

impl<C: Convention> FromStr for GenericPath<C> {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<C: Convention> From<&str> for GenericPath<C> {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<C: Convention> From<String> for GenericPath<C> {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<C: Convention> From<&String> for GenericPath<C> {
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl<'a, C: Convention> IntoIterator for &'a GenericPath<C> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Convention> Serialize for GenericPath<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.repr)
    }
}

impl<'de, C: Convention> Deserialize<'de> for GenericPath<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}
