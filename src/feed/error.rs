//! Errors that end a run, and the per-repository failures that do not.

use thiserror::Error;

use crate::github::SourceError;

/// Fatal errors surfaced by a run. Any of these sets a nonzero exit status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The access token environment variable was unset or blank.
    #[error("{variable} is not set; export a GitHub personal access token to continue")]
    MissingToken {
        /// Name of the environment variable that was checked.
        variable: &'static str,
    },

    /// Configuration could not be loaded or is out of range.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The repository listing failed, so there is nothing to collect.
    #[error("failed to list repositories for {account}: {source}")]
    Enumeration {
        /// Account that was being enumerated.
        account: String,
        /// Underlying source failure.
        source: SourceError,
    },

    /// The snapshot could not be encoded or written.
    #[error("failed to write snapshot '{path}': {message}")]
    SnapshotWrite {
        /// Target snapshot path.
        path: String,
        /// Error detail.
        message: String,
    },

    /// The stored snapshot could not be read or decoded.
    #[error("failed to read snapshot '{path}': {message}")]
    SnapshotRead {
        /// Snapshot path that was read.
        path: String,
        /// Error detail.
        message: String,
    },

    /// Writing CLI output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

/// A repository whose pull requests could not be collected.
///
/// The repository contributes no records; the run carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{repository}: {error}")]
pub struct CollectionFailure {
    /// Full `owner/repo` name.
    pub repository: String,
    /// What went wrong.
    pub error: SourceError,
}
