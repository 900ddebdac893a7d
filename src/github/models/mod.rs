//! Data models for repository and pull request listings.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public summaries handed to the feed pipeline. Timestamps are
//! decoded here so that a malformed payload fails the call that produced it.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::SourceError;

/// Repository entry from an account listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Full `owner/repo` name.
    pub full_name: String,
    /// Star count when GitHub reported one.
    pub stars: Option<u64>,
}

/// Closed pull request entry from a repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// HTML URL for displaying to a user.
    pub html_url: String,
    /// Merge time; `None` when the pull request was closed without merging.
    pub merged_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Author login.
    pub author_login: String,
    /// Author profile URL.
    pub author_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) full_name: String,
    pub(super) stargazers_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
    pub(super) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) merged_at: Option<String>,
    pub(super) updated_at: Option<String>,
    pub(super) user: Option<ApiUser>,
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            full_name: value.full_name,
            stars: value.stargazers_count,
        }
    }
}

impl TryFrom<ApiPullRequest> for PullRequestSummary {
    type Error = SourceError;

    fn try_from(value: ApiPullRequest) -> Result<Self, Self::Error> {
        let number = value.number;
        let updated_raw = value.updated_at.ok_or_else(|| SourceError::MalformedPayload {
            message: format!("pull request #{number} has no updated_at"),
        })?;
        let updated_at = parse_timestamp(number, "updated_at", &updated_raw)?;

        // GitHub sends null for unmerged PRs; an empty string means the same.
        let merged_at = value
            .merged_at
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_timestamp(number, "merged_at", &raw))
            .transpose()?;

        let (author_login, author_url) = value.user.map_or_else(
            || (String::new(), String::new()),
            |user| {
                (
                    user.login.unwrap_or_default(),
                    user.html_url.unwrap_or_default(),
                )
            },
        );

        Ok(Self {
            number,
            title: value.title.unwrap_or_default(),
            html_url: value.html_url.unwrap_or_default(),
            merged_at,
            updated_at,
            author_login,
            author_url,
        })
    }
}

fn parse_timestamp(number: u64, field: &str, raw: &str) -> Result<DateTime<Utc>, SourceError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|error| SourceError::MalformedPayload {
            message: format!("pull request #{number} has invalid {field} `{raw}`: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::{ApiPullRequest, ApiRepository, PullRequestSummary, RepositorySummary};
    use crate::github::error::SourceError;

    #[fixture]
    fn merged_pull_request() -> serde_json::Value {
        json!({
            "number": 7,
            "title": "Fix flaky test",
            "html_url": "https://github.com/orgX/a/pull/7",
            "merged_at": "2024-01-03T09:00:00Z",
            "updated_at": "2024-01-03T10:00:00Z",
            "user": { "login": "octocat", "html_url": "https://github.com/octocat" }
        })
    }

    fn convert(value: serde_json::Value) -> Result<PullRequestSummary, SourceError> {
        let api: ApiPullRequest =
            serde_json::from_value(value).expect("ApiPullRequest should deserialise");
        PullRequestSummary::try_from(api)
    }

    #[rstest]
    fn merged_pull_request_converts_all_fields(merged_pull_request: serde_json::Value) {
        let summary = convert(merged_pull_request).expect("conversion should succeed");

        assert_eq!(summary.number, 7);
        assert_eq!(summary.title, "Fix flaky test");
        assert_eq!(summary.html_url, "https://github.com/orgX/a/pull/7");
        assert_eq!(
            summary.merged_at,
            Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).single()
        );
        assert_eq!(
            Some(summary.updated_at),
            Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).single()
        );
        assert_eq!(summary.author_login, "octocat");
        assert_eq!(summary.author_url, "https://github.com/octocat");
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::empty(json!(""))]
    #[case::blank(json!("  "))]
    fn absent_merge_markers_normalise_to_none(
        mut merged_pull_request: serde_json::Value,
        #[case] merged_at: serde_json::Value,
    ) {
        merged_pull_request["merged_at"] = merged_at;

        let summary = convert(merged_pull_request).expect("conversion should succeed");
        assert_eq!(summary.merged_at, None);
    }

    #[rstest]
    fn missing_merge_field_normalises_to_none(mut merged_pull_request: serde_json::Value) {
        merged_pull_request
            .as_object_mut()
            .expect("fixture should be an object")
            .remove("merged_at");

        let summary = convert(merged_pull_request).expect("conversion should succeed");
        assert_eq!(summary.merged_at, None);
    }

    #[rstest]
    fn offset_timestamps_are_normalised_to_utc(mut merged_pull_request: serde_json::Value) {
        merged_pull_request["updated_at"] = json!("2024-01-03T12:00:00+02:00");

        let summary = convert(merged_pull_request).expect("conversion should succeed");
        assert_eq!(
            Some(summary.updated_at),
            Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).single()
        );
    }

    #[rstest]
    #[case::missing_updated("updated_at", json!(null))]
    #[case::garbage_updated("updated_at", json!("yesterday"))]
    #[case::garbage_merged("merged_at", json!("not-a-date"))]
    fn bad_timestamps_are_malformed_payloads(
        mut merged_pull_request: serde_json::Value,
        #[case] field: &str,
        #[case] value: serde_json::Value,
    ) {
        merged_pull_request[field] = value;

        let result = convert(merged_pull_request);
        assert!(
            matches!(result, Err(SourceError::MalformedPayload { .. })),
            "expected MalformedPayload, got {result:?}"
        );
    }

    #[rstest]
    fn missing_user_yields_empty_author(mut merged_pull_request: serde_json::Value) {
        merged_pull_request["user"] = json!(null);

        let summary = convert(merged_pull_request).expect("conversion should succeed");
        assert!(summary.author_login.is_empty());
        assert!(summary.author_url.is_empty());
    }

    #[rstest]
    fn repository_listing_entry_carries_star_count() {
        let api: ApiRepository = serde_json::from_value(json!({
            "full_name": "orgX/a",
            "stargazers_count": 42,
            "pushed_at": "2024-01-03T10:00:00Z"
        }))
        .expect("ApiRepository should deserialise");

        assert_eq!(
            RepositorySummary::from(api),
            RepositorySummary {
                full_name: "orgX/a".to_owned(),
                stars: Some(42),
            }
        );
    }
}
