//! Property-based tests for the path algebra.
//!
//! Note: The normalize module already has property tests for resolution.
//! This module focuses on parsing, joining and slicing laws.

use super::{PosixPath, Root, WindowsPath};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_. -]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = PosixPath> {
    prop::collection::vec(component_strategy(), 0..6)
        .prop_map(|parts| PosixPath::from_components(parts))
}

fn canonical_posix_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(component_strategy(), 0..6)).prop_map(
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

fn canonical_windows_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(String::new()), Just("\\".to_string()), "[a-z]:\\\\"],
        prop::collection::vec("[a-z0-9_ -]{1,12}", 0..6),
    )
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing a canonical string and formatting it gives the same string
    #[test]
    fn posix_round_trip(s in canonical_posix_strategy()) {
        let p = PosixPath::new(&s);
        prop_assert_eq!(p.as_str(), s.as_str());
    }

    #[test]
    fn windows_round_trip(s in canonical_windows_strategy()) {
        let p = WindowsPath::new(&s);
        prop_assert_eq!(p.as_str(), s.as_str());
    }

    // Built paths have the structure their string parses back to, even when
    // a component is shaped like a drive
    #[test]
    fn windows_built_paths_reparse(
        parts in prop::collection::vec(
            prop_oneof!["[a-z]:", "[a-z]:[a-z]{1,3}", "[a-z0-9_]{1,6}"],
            0..5,
        ),
        start in 0usize..5,
    ) {
        let built = WindowsPath::from_components(&parts);
        let again = WindowsPath::new(built.as_str());
        prop_assert_eq!(again.root(), built.root());
        prop_assert_eq!(again.components(), built.components());

        let rooted = WindowsPath::from_parts(Some(Root::Separator), &parts);
        let sliced = rooted.slice(start.min(rooted.len())..);
        let again = WindowsPath::new(sliced.as_str());
        prop_assert_eq!(again.root(), sliced.root());
        prop_assert_eq!(again.components(), sliced.components());
    }

    // Re-parsing the canonical string reproduces an equal path
    #[test]
    fn reparse_is_identity(s in "[a-z/]{0,24}") {
        let p = PosixPath::new(&s);
        let again = PosixPath::new(p.as_str());
        prop_assert_eq!(again.components(), p.components());
        prop_assert_eq!(again, p);
    }

    // slice(i, j) has length j - i
    #[test]
    fn slice_length(p in relative_path_strategy(), a in 0usize..8, b in 0usize..8) {
        let len = p.len();
        let (i, j) = (a.min(b).min(len), a.max(b).min(len));
        prop_assert_eq!(p.slice(i..j).len(), j - i);
    }

    // Joining is associative for relative operands
    #[test]
    fn join_associative(
        a in relative_path_strategy(),
        b in relative_path_strategy(),
        c in relative_path_strategy(),
    ) {
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
    }

    // Joining adds lengths
    #[test]
    fn join_adds_lengths(a in relative_path_strategy(), b in relative_path_strategy()) {
        prop_assert_eq!(a.join(&b).len(), a.len() + b.len());
    }

    // Repeated dirname on an absolute path stabilizes at the root
    #[test]
    fn dirname_stabilizes_at_root(p in relative_path_strategy()) {
        let mut current = PosixPath::new("/").join(&p);
        for _ in 0..=p.len() {
            current = current.dirname();
        }
        prop_assert_eq!(&current, &PosixPath::new("/"));
        prop_assert_eq!(current.dirname(), current);
    }

    // stem + extension reassembles the filename, except for a dropped trailing dot
    #[test]
    fn stem_extension_reassemble(name in "[a-z.]{1,10}") {
        let p = PosixPath::new(&name);
        let rebuilt = format!("{}{}", p.stem(), p.extension());
        let filename = p.filename();
        prop_assert!(
            rebuilt == filename || format!("{rebuilt}.") == filename,
            "{} + {} vs {}", p.stem(), p.extension(), filename
        );
    }
}
