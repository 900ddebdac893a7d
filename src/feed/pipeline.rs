//! End-to-end run: enumerate, collect, aggregate, persist.

use camino::Utf8PathBuf;
use tracing::{debug, info};

use crate::github::{AccountName, PullRequestGateway, RepositoryGateway};
use crate::store::SnapshotStore;

use super::aggregator::{Clock, SystemClock, aggregate};
use super::collector::PullRequestCollector;
use super::enrichment::{NoEnrichment, RepositoryEnrichment};
use super::enumerator::RepositoryEnumerator;
use super::error::{CollectionFailure, FeedError};
use super::record::Snapshot;

/// Page sizes and fan-out for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Repositories requested from the account listing.
    pub max_repositories: u8,
    /// Closed pull requests requested per repository.
    pub max_pull_requests: u8,
    /// Upper bound on concurrent pull request requests.
    pub concurrency: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_repositories: 10,
            max_pull_requests: 100,
            concurrency: 4,
        }
    }
}

/// A built snapshot plus the repositories that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Repositories the enumerator returned.
    pub repositories: usize,
    /// The aggregated snapshot.
    pub snapshot: Snapshot,
    /// Repositories whose collection failed.
    pub failures: Vec<CollectionFailure>,
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories enumerated.
    pub repositories: usize,
    /// Records in the written snapshot.
    pub records: usize,
    /// Repositories whose collection failed.
    pub failures: Vec<CollectionFailure>,
    /// Snapshot file that was replaced.
    pub path: Utf8PathBuf,
}

/// Wires the enumerator, collector, and aggregator together.
pub struct FeedPipeline<'a, Repositories, PullRequests>
where
    Repositories: RepositoryGateway,
    PullRequests: PullRequestGateway,
{
    repositories: &'a Repositories,
    pull_requests: &'a PullRequests,
    settings: PipelineSettings,
    enrichment: &'a dyn RepositoryEnrichment,
    clock: &'a dyn Clock,
}

impl<'a, Repositories, PullRequests> FeedPipeline<'a, Repositories, PullRequests>
where
    Repositories: RepositoryGateway,
    PullRequests: PullRequestGateway,
{
    /// Creates a pipeline without enrichment that stamps snapshots with the
    /// system clock.
    #[must_use]
    pub const fn new(
        repositories: &'a Repositories,
        pull_requests: &'a PullRequests,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            repositories,
            pull_requests,
            settings,
            enrichment: &NoEnrichment,
            clock: &SystemClock,
        }
    }

    /// Replaces the repository enrichment.
    #[must_use]
    pub const fn with_enrichment(mut self, enrichment: &'a dyn RepositoryEnrichment) -> Self {
        self.enrichment = enrichment;
        self
    }

    /// Replaces the clock used for `generated_at`.
    #[must_use]
    pub const fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds a snapshot without persisting it.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Enumeration`] when the repository listing fails.
    /// Per-repository collection failures are reported in the outcome instead.
    pub async fn build_snapshot(&self, account: &AccountName) -> Result<PipelineOutcome, FeedError> {
        let repositories = RepositoryEnumerator::new(self.repositories, self.enrichment)
            .enumerate(account, self.settings.max_repositories)
            .await
            .map_err(|source| FeedError::Enumeration {
                account: account.as_str().to_owned(),
                source,
            })?;

        let report = PullRequestCollector::new(self.pull_requests, self.settings.concurrency)
            .collect(&repositories, self.settings.max_pull_requests)
            .await;
        debug!(
            records = report.record_count(),
            failed = report.failures.len(),
            "pull request collection settled"
        );

        let snapshot = aggregate(account.as_str(), report.collected, self.clock);
        Ok(PipelineOutcome {
            repositories: repositories.len(),
            snapshot,
            failures: report.failures,
        })
    }

    /// Builds a snapshot and replaces the stored one.
    ///
    /// Nothing is written unless enumeration succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Enumeration`] when the repository listing fails and
    /// [`FeedError::SnapshotWrite`] when the snapshot cannot be persisted.
    pub async fn run(
        &self,
        account: &AccountName,
        store: &SnapshotStore,
    ) -> Result<RunSummary, FeedError> {
        info!(account = account.as_str(), "building merged pull request feed");
        let outcome = self.build_snapshot(account).await?;
        store.write(&outcome.snapshot)?;

        let summary = RunSummary {
            repositories: outcome.repositories,
            records: outcome.snapshot.records.len(),
            failures: outcome.failures,
            path: store.path().to_owned(),
        };
        info!(
            records = summary.records,
            failed = summary.failures.len(),
            path = %summary.path,
            "snapshot written"
        );
        Ok(summary)
    }
}
