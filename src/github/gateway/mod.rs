//! Gateways for listing repositories and pull requests through Octocrab.
//!
//! The pipeline only depends on the two traits below, so the enumerator and
//! collector can be exercised with mocks while [`OctocrabGateway`] handles the
//! real HTTP requests.

mod client;
mod error_mapping;
mod listing;
mod types;

pub use listing::OctocrabGateway;
pub use types::{ListParams, MAX_PER_PAGE};

use async_trait::async_trait;

use crate::github::error::SourceError;
use crate::github::locator::{AccountName, RepositoryLocator};
use crate::github::models::{PullRequestSummary, RepositorySummary};

/// Gateway for account-level repository listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// List one page of the account's repositories, most recently pushed first.
    async fn list_repositories(
        &self,
        account: &AccountName,
        params: &ListParams,
    ) -> Result<Vec<RepositorySummary>, SourceError>;
}

/// Gateway for repository-level pull request listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// List one page of closed pull requests, most recently updated first.
    async fn list_closed_pull_requests(
        &self,
        repository: &RepositoryLocator,
        params: &ListParams,
    ) -> Result<Vec<PullRequestSummary>, SourceError>;
}
