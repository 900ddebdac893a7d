//! Persistence of the latest snapshot as a JSON document.
//!
//! Only one snapshot is kept. [`SnapshotStore::write`] publishes a new
//! document by writing a hidden sibling file and renaming it over the
//! target, so readers see either the previous document or the new one.

mod document;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::feed::{FeedError, Snapshot};

pub use document::{PullRequestEntry, SnapshotDocument};

/// Reads and replaces the snapshot file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    path: Utf8PathBuf,
}

impl SnapshotStore {
    /// Creates a store for `path`; nothing is touched until a read or write.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Replaces the stored snapshot.
    ///
    /// Missing parent directories are created. On failure the previous file,
    /// if any, is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::SnapshotWrite`] when encoding, writing, or the
    /// final rename fails.
    pub fn write(&self, snapshot: &Snapshot) -> Result<(), FeedError> {
        let json = SnapshotDocument::from(snapshot)
            .to_json()
            .map_err(|error| self.write_error(&error))?;

        let file_name = self.file_name().map_err(|message| FeedError::SnapshotWrite {
            path: self.path.to_string(),
            message,
        })?;
        let parent = self.parent();
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|error| self.write_error(&error))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| self.write_error(&error))?;

        let staging = format!(".{file_name}.tmp");
        if let Err(error) = dir.write(&staging, json.as_bytes()) {
            discard(&dir, &staging);
            return Err(self.write_error(&error));
        }
        if let Err(error) = dir.rename(&staging, &dir, file_name) {
            discard(&dir, &staging);
            return Err(self.write_error(&error));
        }

        debug!(path = %self.path, records = snapshot.records.len(), "snapshot replaced");
        Ok(())
    }

    /// Loads the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::SnapshotRead`] when the file is missing,
    /// unreadable, or not a valid document.
    pub fn read(&self) -> Result<Snapshot, FeedError> {
        let file_name = self.file_name().map_err(|message| FeedError::SnapshotRead {
            path: self.path.to_string(),
            message,
        })?;
        let json = Dir::open_ambient_dir(self.parent(), ambient_authority())
            .and_then(|dir| dir.read_to_string(file_name))
            .map_err(|error| self.read_error(&error))?;
        let document = SnapshotDocument::from_json(&json).map_err(|error| self.read_error(&error))?;
        Ok(Snapshot::from(document))
    }

    fn parent(&self) -> &Utf8Path {
        match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }

    fn file_name(&self) -> Result<&str, String> {
        self.path
            .file_name()
            .ok_or_else(|| "path has no file name".to_owned())
    }

    fn write_error(&self, error: &dyn std::fmt::Display) -> FeedError {
        FeedError::SnapshotWrite {
            path: self.path.to_string(),
            message: error.to_string(),
        }
    }

    fn read_error(&self, error: &dyn std::fmt::Display) -> FeedError {
        FeedError::SnapshotRead {
            path: self.path.to_string(),
            message: error.to_string(),
        }
    }
}

fn discard(dir: &Dir, staging: &str) {
    if let Err(error) = dir.remove_file(staging) {
        debug!(file = staging, %error, "could not remove staging file");
    }
}
