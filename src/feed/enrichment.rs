//! Optional metadata attached to repositories before collection.
//!
//! Records inherit whatever the enrichment puts on their repository, so one
//! collector serves both the plain feed and the star-ranked feed.

use crate::github::RepositorySummary;

use super::record::RepositoryRef;

/// Decorates a repository with optional metadata from its listing entry.
pub trait RepositoryEnrichment: Send + Sync {
    /// Returns the repository with any extra metadata applied.
    fn enrich(&self, repository: RepositoryRef, listing: &RepositorySummary) -> RepositoryRef;
}

/// Leaves repositories untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEnrichment;

impl RepositoryEnrichment for NoEnrichment {
    fn enrich(&self, repository: RepositoryRef, _listing: &RepositorySummary) -> RepositoryRef {
        repository
    }
}

/// Uses the repository's star count as its popularity score.
#[derive(Debug, Default, Clone, Copy)]
pub struct StarCount;

impl RepositoryEnrichment for StarCount {
    fn enrich(&self, repository: RepositoryRef, listing: &RepositorySummary) -> RepositoryRef {
        repository.with_popularity(listing.stars)
    }
}
