//! Shared test utilities and filesystem doubles.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vcpkg_ce::args::ParsedArguments;
use vcpkg_ce::fs::{FileHandle, FileSystem, FsError, LocalFileSystem};
use vcpkg_ce::i18n::Translator;
use vcpkg_ce::session::Session;

/// Counts `file` calls and delegates to the local filesystem.
#[derive(Debug, Default)]
pub struct RecordingFileSystem {
    calls: AtomicUsize,
}

impl RecordingFileSystem {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FileSystem for RecordingFileSystem {
    fn file(&self, path: &Path) -> Result<FileHandle, FsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LocalFileSystem.file(path)
    }
}

/// Rejects every path.
#[derive(Debug, Default)]
pub struct RejectingFileSystem;

impl FileSystem for RejectingFileSystem {
    fn file(&self, path: &Path) -> Result<FileHandle, FsError> {
        Err(FsError::InvalidPath {
            raw: path.display().to_string(),
            reason: "rejected by test filesystem",
        })
    }
}

/// Session rooted at `cwd` backed by a fresh recording filesystem.
pub fn recording_session(cwd: &str) -> (Session, Arc<RecordingFileSystem>) {
    let fs = Arc::new(RecordingFileSystem::default());
    let session = Session::new(fs.clone(), PathBuf::from(cwd), Translator::default());
    (session, fs)
}

pub fn raw(pairs: &[(&str, &str)]) -> ParsedArguments {
    ParsedArguments::from_pairs(pairs)
}
