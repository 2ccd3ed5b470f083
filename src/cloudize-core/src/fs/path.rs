//! Pure-ish path helpers: making paths absolute, resolving them the way a
//! shell would see them, and finding the deepest directory shared by a set of
//! files.
//!
//! Only [`resolve`] touches the filesystem.
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Joins `path` onto `base` unless it is already absolute.
pub fn expand_relative(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Removes `.` components and folds `..` into its parent, without consulting
/// the filesystem. A `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Makes `path` absolute and resolves symlinks for the part of it that exists.
///
/// Unlike [`std::fs::canonicalize`] this never fails: a path that does not
/// exist keeps its missing tail appended to the canonical form of its deepest
/// existing ancestor.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    let normalized = normalize(&absolute);
    for ancestor in normalized.ancestors().skip(1) {
        if let Ok(canonical) = dunce::canonicalize(ancestor) {
            // ancestors() only yields prefixes of `normalized`
            if let Ok(rest) = normalized.strip_prefix(ancestor) {
                return canonical.join(rest);
            }
        }
    }
    normalized
}

/// Every proper ancestor directory of `path`, nearest first.
pub fn ancestors(path: &Path) -> Vec<&Path> {
    path.ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// The deepest directory that is an ancestor of every path.
///
/// Candidates are the ancestors shared by all paths; the one with the longest
/// string form wins, the nearest one on an exact tie. Returns `None` for an
/// empty input or when the paths share no ancestor (e.g. different drives).
pub fn deepest_shared_ancestor<P: AsRef<Path>>(paths: &[P]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;
    let others: Vec<HashSet<&Path>> = rest
        .iter()
        .map(|p| ancestors(p.as_ref()).into_iter().collect())
        .collect();

    ancestors(first.as_ref())
        .into_iter()
        .filter(|candidate| others.iter().all(|set| set.contains(candidate)))
        .fold(None, |best: Option<&Path>, candidate| match best {
            Some(b) if b.as_os_str().len() >= candidate.as_os_str().len() => Some(b),
            _ => Some(candidate),
        })
        .map(Path::to_path_buf)
}

/// Whether `ancestor` is a proper ancestor of `path`.
pub fn is_ancestor(path: &Path, ancestor: &Path) -> bool {
    ancestors(path).contains(&ancestor)
}

/// `path` relative to `ancestor`, or `None` if `ancestor` does not contain it.
pub fn strip_ancestor<'a>(path: &'a Path, ancestor: &Path) -> Option<&'a Path> {
    if is_ancestor(path, ancestor) {
        path.strip_prefix(ancestor).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn expand_relative_keeps_absolute_paths() {
        assert_eq!(
            expand_relative(Path::new("/data/x.bam"), Path::new("/work")),
            PathBuf::from("/data/x.bam")
        );
        assert_eq!(
            expand_relative(Path::new("data/x.bam"), Path::new("/work")),
            PathBuf::from("/work/data/x.bam")
        );
    }

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn shared_ancestor_of_sibling_and_nested_file() {
        let paths = [Path::new("/x/y/a.txt"), Path::new("/x/y/z/b.txt")];
        assert_eq!(deepest_shared_ancestor(&paths), Some(PathBuf::from("/x/y")));
        assert_eq!(
            strip_ancestor(paths[0], Path::new("/x/y")),
            Some(Path::new("a.txt"))
        );
        assert_eq!(
            strip_ancestor(paths[1], Path::new("/x/y")),
            Some(Path::new("z/b.txt"))
        );
    }

    #[test]
    fn shared_ancestor_of_single_file_is_its_parent() {
        assert_eq!(
            deepest_shared_ancestor(&[Path::new("/x/y/a.txt")]),
            Some(PathBuf::from("/x/y"))
        );
    }

    #[test]
    fn shared_ancestor_of_nothing() {
        let empty: [&Path; 0] = [];
        assert_eq!(deepest_shared_ancestor(&empty), None);
    }

    #[test]
    fn shared_ancestor_is_not_a_string_prefix() {
        let paths = [Path::new("/data/run1/a"), Path::new("/data/run10/b")];
        assert_eq!(deepest_shared_ancestor(&paths), Some(PathBuf::from("/data")));
    }

    #[test]
    fn strip_ancestor_rejects_unrelated_paths() {
        assert_eq!(strip_ancestor(Path::new("/a/b"), Path::new("/c")), None);
        assert_eq!(strip_ancestor(Path::new("/a/b"), Path::new("/a/b")), None);
    }

    #[test]
    fn resolve_keeps_missing_tail() {
        let dir = tempfile::tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        let missing = dir.path().join("not/there/../here.txt");
        assert_eq!(resolve(&missing), root.join("not/here.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_follows_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        std::fs::create_dir(root.join("real")).unwrap();
        std::fs::write(root.join("real/a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();
        assert_eq!(resolve(&root.join("link/a.txt")), root.join("real/a.txt"));
    }

    proptest! {
        #[test]
        fn every_path_is_under_the_shared_ancestor(
            segments in proptest::collection::vec(
                proptest::collection::vec("[a-c]{1,3}", 1..5),
                1..6,
            )
        ) {
            let paths: Vec<PathBuf> = segments
                .iter()
                .map(|s| PathBuf::from(format!("/{}", s.join("/"))))
                .collect();
            let ancestor = deepest_shared_ancestor(&paths).unwrap();
            for path in &paths {
                prop_assert!(strip_ancestor(path, &ancestor).is_some());
            }
        }
    }
}
