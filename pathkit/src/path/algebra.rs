//! Component algebra: joining, slicing and filename decomposition.
//!
//! None of these operations touch the filesystem or collapse `.`/`..`.

use std::ops::{Bound, Div, RangeBounds};

use crate::path::convention::Convention;
use crate::path::types::GenericPath;

impl<C: Convention> GenericPath<C> {
    /// Append a relative path to this one.
    ///
    /// The result keeps this path's root and concatenates both component
    /// lists. The `/` operator is sugar for this method.
    ///
    /// # Panics
    ///
    /// Panics if `other` is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let base = PosixPath::new("/dir 1/dir 2");
    /// let joined = base.join(&PosixPath::new("dir 3"));
    /// assert_eq!(joined, "/dir 1/dir 2/dir 3");
    /// assert_eq!(&base / "dir 3", joined);
    /// ```
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        assert!(
            other.is_relative(),
            "cannot join absolute path {other} onto {self}"
        );
        let mut components = self.components().to_vec();
        components.extend_from_slice(other.components());
        Self::from_raw(self.root().cloned(), components)
    }

    /// A relative path made of the components in `range`.
    ///
    /// The root is discarded. `slice(..)` of a relative path is the path
    /// itself, and an empty range yields the empty path.
    ///
    /// On Windows a range that starts at a drive-shaped component such as
    /// `c:` yields a path rooted at that drive, with one component fewer,
    /// because that is how its string reads back.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let p = PosixPath::new("a/b/c/d");
    /// assert_eq!(p.slice(1..), PosixPath::new("b/c/d"));
    /// assert_eq!(p.slice(1..2), PosixPath::new("b"));
    /// assert_eq!(p.slice(0..0), PosixPath::empty());
    /// ```
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };
        assert!(
            start <= end && end <= len,
            "slice {start}..{end} out of range for path of length {len}"
        );
        Self::from_raw(None, self.components()[start..end].to_vec())
    }

    /// The parent directory, obtained by dropping the last component.
    ///
    /// - The empty path yields `..`.
    /// - A bare root yields itself, so repeated calls stabilize at the root.
    /// - A single relative component yields the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let p = PosixPath::new("/dir 1/dir 2");
    /// assert_eq!(p.dirname(), "/dir 1");
    /// assert_eq!(p.dirname().dirname(), "/");
    /// assert_eq!(p.dirname().dirname().dirname(), "/");
    /// assert_eq!(PosixPath::empty().dirname(), "..");
    /// ```
    #[must_use]
    pub fn dirname(&self) -> Self {
        if self.is_empty() {
            return Self::from_raw(None, vec!["..".to_string()]);
        }
        let mut components = self.components().to_vec();
        components.pop();
        Self::from_raw(self.root().cloned(), components)
    }

    /// The last component, or `""` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("a/b/c.txt").filename(), "c.txt");
    /// assert_eq!(PosixPath::new("/").filename(), "");
    /// ```
    #[must_use]
    pub fn filename(&self) -> &str {
        self.components().last().map_or("", String::as_str)
    }

    /// The filename without its extension.
    ///
    /// A leading dot does not start an extension and a trailing dot is
    /// dropped: `.file` → `.file`, `file.` → `file`, `file.ext` → `file`.
    /// `.` and `..` are returned as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("/dir/file.ext").stem(), "file");
    /// assert_eq!(PosixPath::new("dir/.file").stem(), ".file");
    /// assert_eq!(PosixPath::new("file.").stem(), "file");
    /// assert_eq!(PosixPath::new("..").stem(), "..");
    /// ```
    #[must_use]
    pub fn stem(&self) -> &str {
        split_extension(self.filename()).0
    }

    /// The extension of the filename including its leading dot, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("filesystem.hpp").extension(), ".hpp");
    /// assert_eq!(PosixPath::new("../filesystem").extension(), "");
    /// assert_eq!(PosixPath::new(".bashrc").extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        split_extension(self.filename()).1
    }

    /// Replace the extension of the filename.
    ///
    /// `extension` may be given with or without its leading dot; an empty
    /// string removes the extension. Paths whose filename is empty, `.` or
    /// `..` are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let p = PosixPath::new("a/b/c/foo.bar");
    /// assert_eq!(p.with_extension(".qix"), "a/b/c/foo.qix");
    /// assert_eq!(p.with_extension("qix"), "a/b/c/foo.qix");
    /// assert_eq!(p.with_extension(""), "a/b/c/foo");
    /// ```
    #[must_use]
    pub fn with_extension(&self, extension: &str) -> Self {
        let filename = self.filename();
        if matches!(filename, "" | "." | "..") {
            return self.clone();
        }

        let mut renamed = split_extension(filename).0.to_string();
        let extension = extension.trim_start_matches('.');
        if !extension.is_empty() {
            renamed.push('.');
            renamed.push_str(extension);
        }

        let mut components = self.components().to_vec();
        components.pop();
        components.push(renamed);
        Self::from_parts(self.root().cloned(), components)
    }
}

/// Split a filename into stem and extension (extension keeps its dot).
fn split_extension(filename: &str) -> (&str, &str) {
    if filename == "." || filename == ".." {
        return (filename, "");
    }
    match filename.rfind('.') {
        None | Some(0) => (filename, ""),
        Some(dot) if dot + 1 == filename.len() => (&filename[..dot], ""),
        Some(dot) => filename.split_at(dot),
    }
}

impl<C: Convention> Div<&GenericPath<C>> for &GenericPath<C> {
    type Output = GenericPath<C>;

    fn div(self, rhs: &GenericPath<C>) -> GenericPath<C> {
        self.join(rhs)
    }
}

impl<C: Convention> Div<GenericPath<C>> for GenericPath<C> {
    type Output = GenericPath<C>;

    fn div(self, rhs: GenericPath<C>) -> GenericPath<C> {
        self.join(&rhs)
    }
}

impl<C: Convention> Div<&GenericPath<C>> for GenericPath<C> {
    type Output = GenericPath<C>;

    fn div(self, rhs: &GenericPath<C>) -> GenericPath<C> {
        self.join(rhs)
    }
}

impl<C: Convention> Div<&str> for &GenericPath<C> {
    type Output = GenericPath<C>;

    fn div(self, rhs: &str) -> GenericPath<C> {
        self.join(&GenericPath::new(rhs))
    }
}

impl<C: Convention> Div<&str> for GenericPath<C> {
    type Output = GenericPath<C>;

    fn div(self, rhs: &str) -> GenericPath<C> {
        self.join(&GenericPath::new(rhs))
    }
}
