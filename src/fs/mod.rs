//! Filesystem capability handed to switches through the session.
//!
//! Switches never touch the disk. They ask a [`FileSystem`] for a
//! [`FileHandle`], which is only a reference to a location that may or may
//! not exist yet.

pub mod path;

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use path::resolve;

/// Errors raised while turning a raw argument into a file handle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    #[error("Base directory '{base}' is not absolute")]
    RelativeBase { base: PathBuf },

    #[error("Path '{path}' is not absolute")]
    NotAbsolute { path: PathBuf },

    #[error("Invalid path '{raw}': {reason}")]
    InvalidPath { raw: String, reason: &'static str },
}

/// Produces handles for absolute paths.
pub trait FileSystem: Send + Sync {
    /// Build a handle for `path`. Performs no I/O.
    fn file(&self, path: &Path) -> Result<FileHandle, FsError>;
}

/// The process's real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn file(&self, path: &Path) -> Result<FileHandle, FsError> {
        if !path.is_absolute() {
            return Err(FsError::NotAbsolute {
                path: path.to_path_buf(),
            });
        }
        Ok(FileHandle::new(path.to_path_buf()))
    }
}

/// Reference to a file location, independent of whether the file exists.
///
/// Two handles are equal when they point at the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// `file://` URI for this handle.
    ///
    /// Backslashes become forward slashes and a drive-letter path gets the
    /// extra leading slash (`file:///C:/...`).
    pub fn to_uri(&self) -> String {
        let raw = self.path.to_string_lossy().replace('\\', "/");
        let mut uri = String::from("file://");
        if !raw.starts_with('/') {
            uri.push('/');
        }
        for ch in raw.chars() {
            match ch {
                ' ' => uri.push_str("%20"),
                '#' => uri.push_str("%23"),
                '?' => uri.push_str("%3F"),
                '%' => uri.push_str("%25"),
                other => uri.push(other),
            }
        }
        uri
    }
}

impl fmt::Display for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_fs_rejects_relative_paths() {
        let err = LocalFileSystem.file(Path::new("out/props.xml")).unwrap_err();
        assert!(matches!(err, FsError::NotAbsolute { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_does_not_require_existing_file() {
        let handle = LocalFileSystem
            .file(Path::new("/definitely/not/here/props.xml"))
            .unwrap();
        assert_eq!(handle.path(), Path::new("/definitely/not/here/props.xml"));
        assert_eq!(handle.file_name(), Some("props.xml"));
    }

    #[cfg(unix)]
    #[test]
    fn uri_escapes_reserved_characters() {
        let handle = FileHandle::new(PathBuf::from("/tmp/my props#1.xml"));
        assert_eq!(handle.to_uri(), "file:///tmp/my%20props%231.xml");
    }

    #[test]
    fn handles_compare_by_path() {
        let a = FileHandle::new(PathBuf::from("/a/b"));
        let b = FileHandle::new(PathBuf::from("/a/b"));
        assert_eq!(a, b);
    }
}
