//! GitHub source client: repository and pull request listings.
//!
//! This module wraps Octocrab behind two small gateway traits, validates the
//! identities passed to them, and maps transport and API failures into
//! [`SourceError`] so that callers never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::SourceError;
pub use gateway::{
    ListParams, MAX_PER_PAGE, OctocrabGateway, PullRequestGateway, RepositoryGateway,
};
pub use locator::{
    AccountName, DEFAULT_API_BASE, PersonalAccessToken, RepositoryLocator, parse_api_base,
};
pub use models::{PullRequestSummary, RepositorySummary};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::{MockPullRequestGateway, MockRepositoryGateway};
