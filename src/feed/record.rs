//! Feed records: repositories, pull requests, and snapshots.

use chrono::{DateTime, Utc};

use crate::github::{PullRequestSummary, RepositoryLocator, SourceError};

/// One source repository observed during a run.
///
/// Created by the enumerator and embedded by value into every record, so the
/// snapshot never needs to resolve repositories again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    name: String,
    url: String,
    popularity: Option<u64>,
}

impl RepositoryRef {
    /// Builds a reference from a stored name and URL.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            popularity: None,
        }
    }

    /// Builds a reference for a validated repository; the URL is derived.
    #[must_use]
    pub fn from_locator(locator: &RepositoryLocator) -> Self {
        Self::new(locator.full_name(), locator.web_url())
    }

    /// Replaces the popularity score (star count).
    #[must_use]
    pub fn with_popularity(mut self, popularity: Option<u64>) -> Self {
        self.popularity = popularity;
        self
    }

    /// Full `owner/repo` name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Browser URL of the repository; the display projection groups by it.
    #[must_use]
    pub const fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Popularity score, when an enrichment supplied one.
    #[must_use]
    pub const fn popularity(&self) -> Option<u64> {
        self.popularity
    }

    /// Parses the name back into a locator for API calls.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidRepositoryName` when the stored name is not
    /// `owner/repo`.
    pub fn locator(&self) -> Result<RepositoryLocator, SourceError> {
        RepositoryLocator::parse_full_name(&self.name)
    }
}

/// One closed pull request observed on one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Repository the pull request belongs to.
    pub repository: RepositoryRef,
    /// Pull request number, unique within the repository.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Browser URL of the pull request.
    pub url: String,
    /// Merge time; `None` when closed without merging.
    pub merged_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Author login.
    pub author_id: String,
    /// Author profile URL.
    pub author_url: String,
}

impl PullRequestRecord {
    /// Tags a listing entry with the repository it came from.
    #[must_use]
    pub fn from_summary(repository: &RepositoryRef, summary: PullRequestSummary) -> Self {
        Self {
            repository: repository.clone(),
            number: summary.number,
            title: summary.title,
            url: summary.html_url,
            merged_at: summary.merged_at,
            updated_at: summary.updated_at,
            author_id: summary.author_login,
            author_url: summary.author_url,
        }
    }

    /// Returns true when the pull request was merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Popularity inherited from the repository.
    #[must_use]
    pub const fn popularity(&self) -> Option<u64> {
        self.repository.popularity()
    }
}

/// Result of one pipeline run; the only persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// When the aggregator built the snapshot.
    pub generated_at: DateTime<Utc>,
    /// Account whose repositories were enumerated.
    pub account: String,
    /// Records in canonical order: `updated_at` descending, then repository
    /// name and number ascending.
    pub records: Vec<PullRequestRecord>,
}
