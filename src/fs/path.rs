//! Path resolver — raw argument + working directory → absolute path.

use std::path::{Component, Path, PathBuf};

use crate::fs::FsError;

/// Resolve `raw` against `base` without touching the disk.
///
/// An absolute `raw` replaces `base`. `.` components are dropped, `..` pops
/// one component but never climbs above the root, and trailing separators
/// disappear.
pub fn resolve(raw: &str, base: &Path) -> Result<PathBuf, FsError> {
    if !base.is_absolute() {
        return Err(FsError::RelativeBase {
            base: base.to_path_buf(),
        });
    }
    if raw.contains('\0') {
        return Err(FsError::InvalidPath {
            raw: raw.to_string(),
            reason: "contains a NUL byte",
        });
    }

    let joined = base.join(raw);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    Ok(out)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn cwd() -> &'static Path {
        Path::new("/home/user/project")
    }

    #[test]
    fn relative_joins_working_directory() {
        let p = resolve("out/props.xml", cwd()).unwrap();
        assert_eq!(p, PathBuf::from("/home/user/project/out/props.xml"));
    }

    #[test]
    fn absolute_replaces_working_directory() {
        let p = resolve("/tmp/props.xml", cwd()).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/props.xml"));
    }

    #[test]
    fn dot_segments_are_normalized() {
        let p = resolve("./a/../b/./c.xml", cwd()).unwrap();
        assert_eq!(p, PathBuf::from("/home/user/project/b/c.xml"));
    }

    #[test]
    fn parent_never_climbs_above_root() {
        let p = resolve("../../../../../x", cwd()).unwrap();
        assert_eq!(p, PathBuf::from("/x"));
    }

    #[test]
    fn trailing_separator_is_dropped() {
        let p = resolve("out/", cwd()).unwrap();
        assert_eq!(p, PathBuf::from("/home/user/project/out"));
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = resolve("x", Path::new("relative/dir")).unwrap_err();
        assert!(matches!(err, FsError::RelativeBase { .. }));
    }

    #[test]
    fn nul_byte_is_rejected() {
        let err = resolve("bad\0name", cwd()).unwrap_err();
        assert!(matches!(err, FsError::InvalidPath { .. }));
    }
}
