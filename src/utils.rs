use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize the result lexically.
///
/// No filesystem access takes place; the returned path may not exist and
/// symlinks are not resolved.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Strip `.` segments and fold `..` into the preceding component. Excess
/// `..` segments are kept for relative paths and dropped at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let ends_in_normal = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if ends_in_normal {
                    out.pop();
                } else if !at_root {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_is_joined_to_base() {
        assert_eq!(
            absolutize(Path::new("report.txt"), Path::new("/home/u/proj")),
            PathBuf::from("/home/u/proj/report.txt")
        );
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        assert_eq!(
            absolutize(Path::new("/var/report.txt"), Path::new("/home/u/proj")),
            PathBuf::from("/var/report.txt")
        );
    }

    #[test]
    fn test_dot_segments_are_stripped() {
        assert_eq!(
            absolutize(Path::new("./sub/./report.txt"), Path::new("/base")),
            PathBuf::from("/base/sub/report.txt")
        );
    }

    #[test]
    fn test_parent_segments_fold_into_base() {
        assert_eq!(
            absolutize(Path::new("../report.txt"), Path::new("/base/sub")),
            PathBuf::from("/base/report.txt")
        );
    }

    #[test]
    fn test_parent_segments_stop_at_root() {
        assert_eq!(
            absolutize(Path::new("/../../report.txt"), Path::new("/base")),
            PathBuf::from("/report.txt")
        );
    }

    #[test]
    fn test_nonexistent_paths_are_accepted() {
        assert_eq!(
            absolutize(Path::new("no/such/dir/out.xml"), Path::new("/work")),
            PathBuf::from("/work/no/such/dir/out.xml")
        );
    }
}
