//! Octocrab-backed listing gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use url::Url;

use crate::github::error::SourceError;
use crate::github::locator::{AccountName, PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiPullRequest, ApiRepository, PullRequestSummary, RepositorySummary,
};
use crate::github::rate_limit::RateLimitInfo;

use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};
use super::types::{PULL_REQUEST_SORT, REPOSITORY_SORT};
use super::{ListParams, PullRequestGateway, RepositoryGateway};

/// Gateway that talks to the GitHub REST API through Octocrab.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated gateway rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` when the base URI cannot be parsed or
    /// `SourceError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, SourceError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> SourceError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!("{base_message} (resets at {info})"),
                    None => base_message,
                };

                SourceError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        RateLimitInfo::from_epoch_seconds(rate.reset)
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    async fn list_repositories(
        &self,
        account: &AccountName,
        params: &ListParams,
    ) -> Result<Vec<RepositorySummary>, SourceError> {
        params.validate()?;

        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let query_params = [
            ("sort", REPOSITORY_SORT),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        let page_result: Page<ApiRepository> = match self
            .client
            .get(account.repositories_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list repositories", &error)
                    .await);
            }
        };

        Ok(page_result
            .items
            .into_iter()
            .map(RepositorySummary::from)
            .collect())
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_closed_pull_requests(
        &self,
        repository: &RepositoryLocator,
        params: &ListParams,
    ) -> Result<Vec<PullRequestSummary>, SourceError> {
        params.validate()?;

        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let query_params = [
            ("state", "closed"),
            ("sort", PULL_REQUEST_SORT),
            ("direction", "desc"),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        let page_result: Page<ApiPullRequest> = match self
            .client
            .get(repository.pulls_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list pulls", &error)
                    .await);
            }
        };

        page_result
            .items
            .into_iter()
            .map(PullRequestSummary::try_from)
            .collect()
    }
}
