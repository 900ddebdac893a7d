//! Error types exposed by the GitHub source layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while validating input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// An account name was empty.
    #[error("account name must not be empty")]
    MissingAccount,

    /// A repository name did not match `owner/repo`.
    #[error("repository name must match owner/repo, got `{0}`")]
    InvalidRepositoryName(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if available from the rate limit endpoint.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed GitHub payload: {message}")]
    MalformedPayload {
        /// What could not be decoded.
        message: String,
    },
}
