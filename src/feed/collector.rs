//! Per-repository pull request collection with failure isolation.

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, warn};

use crate::github::{ListParams, PullRequestGateway, PullRequestSummary, SourceError};

use super::error::CollectionFailure;
use super::record::{PullRequestRecord, RepositoryRef};

/// Outcome of collecting every repository in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionReport {
    /// Records per successful repository, in enumeration order.
    pub collected: Vec<Vec<PullRequestRecord>>,
    /// Repositories that contributed nothing because their listing failed.
    pub failures: Vec<CollectionFailure>,
}

impl CollectionReport {
    /// Total records across all repositories.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.collected.iter().map(Vec::len).sum()
    }
}

/// Fetches closed pull requests for each repository.
///
/// Each repository is requested once with a single page of `page_size` items.
/// Up to `concurrency` requests are in flight at a time; the report is only
/// returned after every request has settled.
pub struct PullRequestCollector<'a, Gateway>
where
    Gateway: PullRequestGateway,
{
    gateway: &'a Gateway,
    concurrency: usize,
}

impl<'a, Gateway> PullRequestCollector<'a, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Creates a collector; a zero `concurrency` is treated as one.
    #[must_use]
    pub fn new(gateway: &'a Gateway, concurrency: usize) -> Self {
        Self {
            gateway,
            concurrency: concurrency.max(1),
        }
    }

    /// Collects every repository, isolating failures.
    ///
    /// A failing repository is logged and recorded in
    /// [`CollectionReport::failures`]; it never stops the others.
    pub async fn collect(
        &self,
        repositories: &[RepositoryRef],
        page_size: u8,
    ) -> CollectionReport {
        let params = ListParams::first_page(page_size);

        let outcomes: Vec<Result<Vec<PullRequestRecord>, CollectionFailure>> =
            stream::iter(repositories)
                .map(|repository| self.collect_repository(repository, &params))
                .buffered(self.concurrency)
                .collect()
                .await;

        let mut report = CollectionReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(records) => report.collected.push(records),
                Err(failure) => report.failures.push(failure),
            }
        }
        report
    }

    async fn collect_repository(
        &self,
        repository: &RepositoryRef,
        params: &ListParams,
    ) -> Result<Vec<PullRequestRecord>, CollectionFailure> {
        debug!(repository = repository.name(), "collecting pull requests");

        match self.fetch(repository, params).await {
            Ok(summaries) => {
                let records: Vec<PullRequestRecord> = summaries
                    .into_iter()
                    .map(|summary| PullRequestRecord::from_summary(repository, summary))
                    .collect();
                for record in records.iter().filter(|record| {
                    record
                        .merged_at
                        .is_some_and(|merged_at| merged_at > record.updated_at)
                }) {
                    debug!(
                        repository = repository.name(),
                        number = record.number,
                        "merged_at is later than updated_at"
                    );
                }
                debug!(
                    repository = repository.name(),
                    count = records.len(),
                    "collected pull requests"
                );
                Ok(records)
            }
            Err(error) => {
                warn!(
                    repository = repository.name(),
                    %error,
                    "skipping repository: pull request listing failed"
                );
                Err(CollectionFailure {
                    repository: repository.name().to_owned(),
                    error,
                })
            }
        }
    }

    async fn fetch(
        &self,
        repository: &RepositoryRef,
        params: &ListParams,
    ) -> Result<Vec<PullRequestSummary>, SourceError> {
        let locator = repository.locator()?;
        self.gateway
            .list_closed_pull_requests(&locator, params)
            .await
    }
}
