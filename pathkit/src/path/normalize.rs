//! Lexical normalization and resolution.
//!
//! This module provides functionality to:
//! - Collapse `.` and `..` components without touching the filesystem
//! - Resolve relative paths against a base directory or the working directory
//! - Compute the relative path between two paths
//! - Expand a leading `~` to the home directory
//!
//! Only [`GenericPath::make_absolute`] and [`GenericPath::relative_in`] read
//! the working directory, and they do so through an injected [`Cwd`].

use crate::error::{Error, Result};
use crate::fs::Cwd;
use crate::path::convention::{Convention, Root};
use crate::path::types::{GenericPath, NativePath};

const CUR_DIR: &str = ".";
const PARENT_DIR: &str = "..";

impl<C: Convention> GenericPath<C> {
    /// Collapse `.` and `..` components lexically.
    ///
    /// `.` is dropped and `..` removes the preceding real component. A `..`
    /// with nothing left to remove is dropped for absolute paths (resolution
    /// clamps at the root) and kept for relative paths.
    ///
    /// This form is purely lexical and never consults the working directory.
    /// Resolving against the working
    /// directory is [`make_absolute`](Self::make_absolute), and against an
    /// explicit base is [`resolve_against`](Self::resolve_against).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let p = PosixPath::new("/a/b/c/../../d/e/foo/../././././bar.h");
    /// assert_eq!(p.resolve(), "/a/d/e/bar.h");
    ///
    /// assert_eq!(PosixPath::new("/../../a").resolve(), "/a");
    /// assert_eq!(PosixPath::new("a/../../foo.c").resolve(), "../foo.c");
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Self {
        let clamp_at_root = self.is_absolute();
        let mut stack: Vec<String> = Vec::with_capacity(self.len());

        for component in self.components() {
            match component.as_str() {
                CUR_DIR => {}
                PARENT_DIR => match stack.last() {
                    Some(last) if last != PARENT_DIR => {
                        stack.pop();
                    }
                    _ if clamp_at_root => {}
                    _ => stack.push(PARENT_DIR.to_string()),
                },
                _ => stack.push(component.clone()),
            }
        }

        Self::from_raw(self.root().cloned(), stack)
    }

    /// Resolve this path against `base`.
    ///
    /// Absolute paths ignore `base` and are only normalized. Relative paths
    /// are joined onto `base` first, so an absolute `base` always produces an
    /// absolute result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let base = PosixPath::new("/a/b/c");
    /// assert_eq!(PosixPath::new("../x.h").resolve_against(&base), "/a/b/x.h");
    /// assert_eq!(PosixPath::new("/y").resolve_against(&base), "/y");
    /// ```
    #[must_use]
    pub fn resolve_against(&self, base: &Self) -> Self {
        if self.is_absolute() {
            self.resolve()
        } else {
            base.join(self).resolve()
        }
    }

    /// Join a relative path onto this one and normalize the result.
    ///
    /// Equivalent to `self.join(relative).resolve()`.
    ///
    /// # Panics
    ///
    /// Panics if `relative` is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let base = PosixPath::new("/a/b/../c");
    /// assert_eq!(base.resolve_relative(&PosixPath::new("../filesystem.hpp")), "/a/filesystem.hpp");
    /// ```
    #[must_use]
    pub fn resolve_relative(&self, relative: &Self) -> Self {
        self.join(relative).resolve()
    }

    /// Make this path absolute against the working directory reported by
    /// `cwd`, then normalize it.
    ///
    /// Purely lexical: the path does not need to exist and nothing but the
    /// working directory is queried. Absolute paths are only normalized, so
    /// the operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{MemoryFilesystem, PosixPath};
    ///
    /// let fs = MemoryFilesystem::<pathkit::Posix>::new(PosixPath::new("/work/src"));
    /// let p = PosixPath::new("../missing").make_absolute(&fs).unwrap();
    /// assert_eq!(p, "/work/missing");
    /// ```
    pub fn make_absolute(&self, cwd: &impl Cwd<C>) -> Result<Self> {
        if self.is_absolute() {
            return Ok(self.resolve());
        }
        let base = cwd.getcwd()?;
        Ok(self.resolve_against(&base))
    }

    /// The lexical path leading from `base` to this path.
    ///
    /// Both paths are normalized first. The result is `..` once for every
    /// component of `base` past the common prefix, followed by the remaining
    /// components of this path. Equal paths give the empty path.
    ///
    /// Returns `None` if the roots differ, if `base` still climbs through
    /// `..` past the common prefix (the answer would depend on directories
    /// that are not named), or if the answer cannot be spelled as a relative
    /// path (on Windows, when it would start with a component such as `c:`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::PosixPath;
    ///
    /// let target = PosixPath::new("/a/b/f/g/e");
    /// let base = PosixPath::new("/a/b/c/d");
    /// assert_eq!(target.relative(&base).unwrap(), "../../f/g/e");
    /// assert!(base.relative(&base).unwrap().is_empty());
    /// assert!(target.relative(&PosixPath::new("a/b")).is_none());
    /// ```
    #[must_use]
    pub fn relative(&self, base: &Self) -> Option<Self> {
        let target = self.resolve();
        let base = base.resolve();
        if !same_root(target.root(), base.root()) {
            return None;
        }

        let common = target
            .components()
            .iter()
            .zip(base.components())
            .take_while(|(a, b)| a == b)
            .count();

        let climbs = &base.components()[common..];
        if climbs.iter().any(|c| c == PARENT_DIR) {
            return None;
        }

        let mut components = vec![PARENT_DIR.to_string(); climbs.len()];
        components.extend_from_slice(&target.components()[common..]);
        let relative = Self::from_raw(None, components);
        // a leading drive-shaped component would read back as a root
        relative.is_relative().then_some(relative)
    }

    /// The relative path from `base` to this path after making both absolute
    /// against the working directory reported by `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined, or
    /// [`Error::NoRelativePath`] if the two paths live under different roots
    /// or no relative spelling exists.
    pub fn relative_in(&self, base: &Self, cwd: &impl Cwd<C>) -> Result<Self> {
        let target = self.make_absolute(cwd)?;
        let base = base.make_absolute(cwd)?;
        target.relative(&base).ok_or_else(|| Error::NoRelativePath {
            path: target.to_string(),
            base: base.to_string(),
        })
    }
}

/// Drive letters compare case-insensitively.
fn same_root(a: Option<&Root>, b: Option<&Root>) -> bool {
    match (a, b) {
        (None, None) | (Some(Root::Separator), Some(Root::Separator)) => true,
        (Some(Root::Volume(a)), Some(Root::Volume(b))) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Expand a leading `~` component to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathkit::NativePath;
/// use pathkit::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde(&NativePath::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert_eq!(expanded.filename(), "project");
///
/// // Paths without a leading tilde are returned unchanged
/// let plain = NativePath::new("relative/dir");
/// assert_eq!(expand_tilde(&plain).unwrap(), plain);
/// ```
pub fn expand_tilde(path: &NativePath) -> Result<NativePath> {
    let first = match path.get(0) {
        Some(first) if path.is_relative() && first.starts_with('~') => first,
        _ => return Ok(path.clone()),
    };

    if first != "~" {
        return Err(Error::InvalidPath {
            path: path.as_str().into(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.as_str().into(),
        reason: "Cannot determine home directory".to_string(),
    })?;
    let home = NativePath::from_std_path(&home)?;

    let (_, components) = path.clone().into_parts();
    Ok(home.join(&NativePath::from_components(&components[1..])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFilesystem;
    use crate::path::{Posix, PosixPath, Windows, WindowsPath};

    #[test]
    fn test_resolve_collapses_dots() {
        let p = PosixPath::new("/a/b/c/../../d/e/foo/../././././bar.h");
        assert_eq!(p.resolve(), PosixPath::new("/a/d/e/bar.h"));
    }

    #[test]
    fn test_resolve_clamps_absolute_at_root() {
        assert_eq!(PosixPath::new("/../../a/b/c/../d").resolve(), "/a/b/d");
        assert_eq!(PosixPath::new("/..").resolve(), "/");
        assert_eq!(WindowsPath::new("c:\\..\\..\\x").resolve(), "c:\\x");
    }

    #[test]
    fn test_resolve_keeps_leading_parents_for_relative() {
        assert_eq!(PosixPath::new("../../a/b/c/../d").resolve(), "../../a/b/d");
        assert_eq!(PosixPath::new("a/../../foo.c").resolve(), "../foo.c");
        assert_eq!(PosixPath::new("./.").resolve(), "");
        assert_eq!(PosixPath::new("a/..").resolve(), "");
    }

    #[test]
    fn test_resolve_plain_path_unchanged() {
        let p = PosixPath::new("filesystem.hpp");
        assert_eq!(p.resolve(), p);
    }

    #[test]
    fn test_resolve_against() {
        let base = PosixPath::new("/a/b/c");
        assert_eq!(
            PosixPath::new("filesystem.hpp").resolve_against(&base),
            "/a/b/c/filesystem.hpp"
        );
        assert_eq!(
            PosixPath::new("../filesystem.hpp").resolve_against(&base),
            "/a/b/filesystem.hpp"
        );
        assert_eq!(PosixPath::new("/x/./y").resolve_against(&base), "/x/y");
    }

    #[test]
    fn test_resolve_relative() {
        let base = PosixPath::new("/a/b/c");
        assert_eq!(
            base.resolve_relative(&PosixPath::new("filesystem.hpp")),
            "/a/b/c/filesystem.hpp"
        );
        assert_eq!(
            PosixPath::new("/a/b/../c").resolve_relative(&PosixPath::new("../filesystem.hpp")),
            "/a/filesystem.hpp"
        );
    }

    #[test]
    fn test_make_absolute() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/src/demo"));
        let cases = [
            ("path_demo.rs", "/src/demo/path_demo.rs"),
            ("./path_demo.rs", "/src/demo/path_demo.rs"),
            ("missing", "/src/demo/missing"),
            ("../missing", "/src/missing"),
            ("/src/demo/path_demo.rs", "/src/demo/path_demo.rs"),
        ];
        for (input, expected) in cases {
            let abs = PosixPath::new(input).make_absolute(&fs).unwrap();
            assert_eq!(abs, expected, "make_absolute({input})");
        }
    }

    #[test]
    fn test_make_absolute_idempotent() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/w"));
        let once = PosixPath::new("x/../y/./z").make_absolute(&fs).unwrap();
        let twice = once.make_absolute(&fs).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_relative() {
        let target = PosixPath::new("/a/b/f/g/e");
        let base = PosixPath::new("/a/b/c/d");
        assert_eq!(target.relative(&base).unwrap(), "../../f/g/e");
        assert_eq!(base.relative(&target).unwrap(), "../../../c/d");
    }

    #[test]
    fn test_relative_same_path_is_empty() {
        let p = PosixPath::new("/a/b");
        let rel = p.relative(&PosixPath::new("/a/./b/")).unwrap();
        assert!(rel.is_empty());
        assert_eq!(rel, "");
    }

    #[test]
    fn test_relative_descendant_and_ancestor() {
        let dir = PosixPath::new("/a");
        let file = PosixPath::new("/a/b/c.txt");
        assert_eq!(file.relative(&dir).unwrap(), "b/c.txt");
        assert_eq!(dir.relative(&file).unwrap(), "../..");
    }

    #[test]
    fn test_relative_between_relative_paths() {
        assert_eq!(
            PosixPath::new("../x").relative(&PosixPath::new("y")).unwrap(),
            "../../x"
        );
        assert!(PosixPath::new("x").relative(&PosixPath::new("../y")).is_none());
    }

    #[test]
    fn test_relative_root_mismatch() {
        assert!(PosixPath::new("/a").relative(&PosixPath::new("a")).is_none());
        assert!(WindowsPath::new("c:\\a")
            .relative(&WindowsPath::new("d:\\a"))
            .is_none());
        assert_eq!(
            WindowsPath::new("C:\\a\\b")
                .relative(&WindowsPath::new("c:\\a"))
                .unwrap(),
            "b"
        );
    }

    #[test]
    fn test_relative_never_starts_with_drive() {
        let target = WindowsPath::new("\\c:\\x");
        let base = WindowsPath::new("\\");
        assert!(target.relative(&base).is_none());

        let nested = WindowsPath::new("\\a\\c:\\x")
            .relative(&WindowsPath::new("\\a\\b"))
            .unwrap();
        assert!(nested.is_relative());
        assert_eq!(nested, "..\\c:\\x");
    }

    #[test]
    fn test_relative_in() {
        let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/home/me"));
        let rel = PosixPath::new("docs/a.txt")
            .relative_in(&PosixPath::new("/home/other"), &fs)
            .unwrap();
        assert_eq!(rel, "../me/docs/a.txt");
    }

    #[test]
    fn test_relative_in_reports_different_volumes() {
        let fs = MemoryFilesystem::<Windows>::new(WindowsPath::new("c:\\work"));
        let err = WindowsPath::new("d:\\data")
            .relative_in(&WindowsPath::new("src"), &fs)
            .unwrap_err();
        assert!(matches!(err, Error::NoRelativePath { .. }));
    }

    #[test]
    fn test_relative_round_trip() {
        let a = PosixPath::new("/x/y/z/file.txt");
        let base = PosixPath::new("/x/q/r");
        let rel = a.relative(&base).unwrap();
        assert_eq!(base.join(&rel).resolve(), a.resolve());
    }

    #[test]
    fn test_expand_tilde_home() {
        let home = NativePath::from_std_path(&home::home_dir().unwrap()).unwrap();
        assert_eq!(expand_tilde(&NativePath::new("~")).unwrap(), home);
        assert_eq!(
            expand_tilde(&NativePath::new("~/test")).unwrap(),
            home.join(&NativePath::new("test"))
        );
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        let result = expand_tilde(&NativePath::new("~user/path"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_expand_tilde_only_leading_component() {
        let p = NativePath::new("a/~/b");
        assert_eq!(expand_tilde(&p).unwrap(), p);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn component_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(".".to_string()),
                Just("..".to_string()),
                "[a-zA-Z0-9_-]{1,10}",
            ]
        }

        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            (any::<bool>(), prop::collection::vec(component_strategy(), 0..=8)).prop_map(
                |(absolute, parts)| {
                    let joined = parts.join("/");
                    if absolute {
                        format!("/{joined}")
                    } else {
                        joined
                    }
                },
            )
        }

        fn absolute_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-z0-9]{1,6}", 0..=6)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Resolution is idempotent
            #[test]
            fn resolve_idempotent(s in path_with_dots_strategy()) {
                let once = PosixPath::new(&s).resolve();
                prop_assert_eq!(once.resolve(), once);
            }

            /// Resolved paths never contain "." components
            #[test]
            fn resolve_no_current_dir(s in path_with_dots_strategy()) {
                let resolved = PosixPath::new(&s).resolve();
                prop_assert!(resolved.iter().all(|c| c != "."));
            }

            /// Resolved absolute paths never contain ".." components
            #[test]
            fn resolve_absolute_no_parent_dir(s in path_with_dots_strategy()) {
                let path = PosixPath::new(&s);
                prop_assume!(path.is_absolute());
                prop_assert!(path.resolve().iter().all(|c| c != ".."));
            }

            /// Relative round trip: base / a.relative(base) resolves back to a
            #[test]
            fn relative_round_trip(a in absolute_path_strategy(), base in absolute_path_strategy()) {
                let a = PosixPath::new(&a);
                let base = PosixPath::new(&base);
                let rel = a.relative(&base).unwrap();
                prop_assert_eq!(base.join(&rel).resolve(), a.resolve());
            }

            /// make_absolute is idempotent
            #[test]
            fn make_absolute_idempotent(s in path_with_dots_strategy()) {
                let fs = MemoryFilesystem::<Posix>::new(PosixPath::new("/cwd/nested"));
                let once = PosixPath::new(&s).make_absolute(&fs).unwrap();
                prop_assert!(once.is_absolute());
                prop_assert_eq!(once.make_absolute(&fs).unwrap(), once);
            }
        }
    }
}
